use std::sync::Arc;

use dioxus::prelude::*;
use rfd::FileDialog;

use crate::platform::desktop::blocking::run_service;
use crate::ui::state::app_state::AppState;
use crate::usecase::services::upload_service::{UploadScope, UploadService};

const IMAGE_FILTER: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

#[derive(Debug, Clone, PartialEq)]
pub struct UploadedImage {
    pub url: String,
    pub file_name: String,
}

/// Asks for an image file, uploads it in the background and hands the public
/// URL to `on_uploaded`. Cancelling the dialog does nothing.
pub fn pick_and_upload<F>(
    state: AppState,
    uploads: Arc<UploadService>,
    scope: UploadScope,
    on_uploaded: F,
) where
    F: FnOnce(UploadedImage) + 'static,
{
    let Some(path) = FileDialog::new()
        .add_filter("이미지", &IMAGE_FILTER)
        .pick_file()
    else {
        return;
    };
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("image")
        .to_string();

    let mut busy = state.busy;
    busy.set(true);
    spawn(async move {
        let result = run_service("upload-image", move || uploads.upload_path(scope, &path)).await;
        busy.set(false);
        match result {
            Ok(url) => on_uploaded(UploadedImage { url, file_name }),
            Err(err) => state.report(&err),
        }
    });
}
