// 传输动作：文件选择、上传、下载、删除

use gpui::prelude::*;
use gpui_component::notification::NotificationType;
use tracing::{error, info};

use super::{push_transfer_notification, push_window_notification, ShareState};
use crate::api::{ApiError, ApiManager};
use crate::i18n;
use crate::models::share::{self, RequestPhase, SelectedFile};

impl ShareState {
    /// 打开系统文件选择器，选中结果写入 selected_file
    /// 用户取消选择时保留之前的选中状态
    pub fn pick_upload_file(&mut self, cx: &mut gpui::Context<Self>) {
        if self.upload_phase.is_in_flight() {
            info!("[SHARE] Upload in flight, picker ignored");
            return;
        }
        info!("[SHARE] Opening file picker");

        let share_state = cx.entity().clone();
        let picker_title = i18n::t(&self.language, "share.upload.picker_title");

        cx.to_async()
            .spawn(async move |async_cx| {
                let file_picker = rfd::AsyncFileDialog::new().set_title(picker_title);

                let Some(file_handle) = file_picker.pick_file().await else {
                    info!("[SHARE] File selection cancelled by user");
                    return;
                };

                let local_path = file_handle.path().to_path_buf();

                // 读取文件大小（此处不在 tokio 运行时中，使用 std::fs）
                let size_bytes = match std::fs::metadata(&local_path) {
                    Ok(metadata) => metadata.len(),
                    Err(e) => {
                        error!("[SHARE] Failed to read file metadata: {}", e);
                        return;
                    }
                };

                let selected = SelectedFile::from_path(local_path, size_bytes);

                let _ = async_cx.update(|cx| {
                    share_state.update(cx, |state, cx| {
                        state.set_selected_file(selected);
                        cx.notify();
                    });
                });
            })
            .detach();
    }

    /// 上传当前选中的文件
    /// 本地校验不通过时直接提示，不发起网络请求
    pub fn upload_selected(&mut self, cx: &mut gpui::Context<Self>) {
        if self.upload_phase.is_in_flight() {
            info!("[SHARE] Upload already in flight, ignoring");
            return;
        }

        let selected = match share::validate_upload(self.selected_file.as_ref()) {
            Ok(file) => file.clone(),
            Err(e) => {
                info!("[SHARE] Upload rejected locally: {:?}", e);
                push_window_notification(
                    i18n::t(&self.language, e.message_key()).to_string(),
                    NotificationType::Warning,
                    cx,
                );
                return;
            }
        };

        info!(
            "[SHARE] Uploading {} ({} bytes)",
            selected.name, selected.size_bytes
        );
        self.upload_phase = RequestPhase::InFlight;
        cx.notify();

        let share_state = cx.entity().clone();
        let manager = ApiManager::global();
        let client = manager.client();

        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<Result<String, ApiError>>();

        let file_name = selected.name.clone();
        let mime_type = selected.mime_type.clone();
        let local_path = selected.path.clone();

        manager.runtime().spawn(async move {
            let result = async {
                let bytes = tokio::fs::read(&local_path).await.map_err(ApiError::from)?;
                client.upload_file(&file_name, &mime_type, bytes).await
            }
            .await;
            let _ = tx.send(result);
        });

        cx.to_async()
            .spawn(async move |async_cx| {
                let Some(result) = rx.recv().await else {
                    error!("[SHARE] Upload channel closed unexpectedly");
                    return;
                };

                let _ = async_cx.update(|cx| {
                    let lang = share_state.read(cx).language;
                    let succeeded = result.is_ok();

                    share_state.update(cx, |state, cx| {
                        match &result {
                            Ok(_) => {
                                info!("[SHARE] Upload completed: {}", selected.name);
                                state.upload_phase = RequestPhase::Succeeded;
                                // 成功后清空选中文件，选择器回到初始状态
                                state.clear_selected_file();
                            }
                            Err(e) => {
                                error!("[SHARE] Upload failed: {}", e);
                                state.upload_phase = RequestPhase::Failed;
                            }
                        }
                        cx.notify();
                    });

                    // 失败时优先展示服务端响应文本
                    let message = match &result {
                        Ok(server_message) => {
                            let text = server_message.trim();
                            if text.is_empty() {
                                i18n::t(&lang, "share.upload.success").to_string()
                            } else {
                                text.to_string()
                            }
                        }
                        Err(e) => e
                            .server_message()
                            .unwrap_or_else(|| i18n::t(&lang, "share.upload.failed").to_string()),
                    };
                    let kind = if succeeded {
                        NotificationType::Success
                    } else {
                        NotificationType::Error
                    };
                    push_transfer_notification(message, kind, cx);

                    // 上传成功后自动刷新清单
                    if succeeded {
                        share_state.update(cx, |state, cx| {
                            state.refresh_list(cx);
                        });
                    }
                });
            })
            .detach();
    }

    /// 下载指定文件到本地
    /// `requested` 为 None 时回退到工具栏文件名输入框的内容
    pub fn download_file(&mut self, requested: Option<String>, cx: &mut gpui::Context<Self>) {
        if self.download_phase.is_in_flight() {
            info!("[SHARE] Download already in flight, ignoring");
            return;
        }

        let fallback = self.name_input_text(cx);
        let name = match share::validate_download_name(requested.as_deref().unwrap_or(&fallback)) {
            Ok(name) => name,
            Err(e) => {
                info!("[SHARE] Download rejected locally: {:?}", e);
                push_window_notification(
                    i18n::t(&self.language, e.message_key()).to_string(),
                    NotificationType::Warning,
                    cx,
                );
                return;
            }
        };

        info!("[SHARE] Download file: {}", name);
        self.download_phase = RequestPhase::InFlight;
        cx.notify();

        let share_state = cx.entity().clone();
        let manager = ApiManager::global();
        let client = manager.client();
        let runtime = manager.runtime();
        let picker_title = i18n::t(&self.language, "share.download.picker_title");

        // 下载行为设置：默认目录与完成后是否打开文件夹
        let settings = crate::services::storage::load_settings().unwrap_or_default();
        let default_dir = settings.server.download_dir.clone();
        let open_after = settings.server.open_folder_after_download;

        cx.to_async()
            .spawn(async move |async_cx| {
                // 确定保存路径：优先使用默认下载目录，否则打开保存对话框
                let local_path = if !default_dir.is_empty() {
                    let path = std::path::PathBuf::from(&default_dir).join(&name);
                    info!("[SHARE] Using default download directory: {:?}", path);
                    path
                } else {
                    let file_picker = rfd::AsyncFileDialog::new()
                        .set_title(picker_title)
                        .set_file_name(&name);

                    let Some(file_handle) = file_picker.save_file().await else {
                        info!("[SHARE] Download cancelled by user");
                        // 放弃下载，回到空闲状态
                        let _ = async_cx.update(|cx| {
                            share_state.update(cx, |state, cx| {
                                state.download_phase = RequestPhase::Idle;
                                cx.notify();
                            });
                        });
                        return;
                    };

                    file_handle.path().to_path_buf()
                };

                info!("[SHARE] Downloading to: {:?}", local_path);

                let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<Result<(), ApiError>>();

                let name_for_request = name.clone();
                let path_for_request = local_path.clone();
                runtime.spawn(async move {
                    let result = async {
                        let bytes = client.download_file(&name_for_request).await?;
                        tokio::fs::write(&path_for_request, &bytes)
                            .await
                            .map_err(ApiError::from)
                    }
                    .await;
                    let _ = tx.send(result);
                });

                let Some(result) = rx.recv().await else {
                    error!("[SHARE] Download channel closed unexpectedly");
                    return;
                };

                let _ = async_cx.update(|cx| {
                    let lang = share_state.read(cx).language;
                    let succeeded = result.is_ok();

                    share_state.update(cx, |state, cx| {
                        match &result {
                            Ok(()) => {
                                info!("[SHARE] Download completed: {:?}", local_path);
                                state.download_phase = RequestPhase::Succeeded;
                                // 成功后清空文件名输入框
                                state.reset_name_input();
                            }
                            Err(e) => {
                                error!("[SHARE] Download failed: {}", e);
                                state.download_phase = RequestPhase::Failed;
                            }
                        }
                        cx.notify();
                    });

                    let message = i18n::t(&lang, download_result_key(&result)).to_string();
                    let kind = if succeeded {
                        NotificationType::Success
                    } else {
                        NotificationType::Error
                    };
                    push_transfer_notification(message, kind, cx);

                    // 下载完成后打开所在文件夹
                    if succeeded && open_after {
                        if let Some(parent) = local_path.parent() {
                            if let Err(e) = open::that(parent) {
                                error!("[SHARE] Failed to open folder: {}", e);
                            }
                        }
                    }
                });
            })
            .detach();
    }

    /// 请求删除文件，弹出确认对话框
    pub fn request_delete(&mut self, name: String, cx: &mut gpui::Context<Self>) {
        if self.delete_phase.is_in_flight() {
            info!("[SHARE] Delete already in flight, ignoring");
            return;
        }
        info!("[SHARE] Delete requested: {}", name);

        let dialog = self.ensure_delete_dialog(cx);
        dialog.update(cx, |dialog, cx| {
            dialog.open(name);
            cx.notify();
        });
        cx.notify();
    }

    /// 用户在确认对话框中点击确认后执行删除
    pub fn confirm_delete(&mut self, cx: &mut gpui::Context<Self>) {
        let Some(dialog) = self.delete_dialog.clone() else {
            return;
        };
        let name = dialog.read(cx).file_name.clone();
        if name.is_empty() || self.delete_phase.is_in_flight() {
            return;
        }

        info!("[SHARE] Delete confirmed: {}", name);
        self.delete_phase = RequestPhase::InFlight;
        dialog.update(cx, |dialog, cx| {
            dialog.start_deleting();
            cx.notify();
        });
        cx.notify();

        let share_state = cx.entity().clone();
        let manager = ApiManager::global();
        let client = manager.client();

        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<Result<(), ApiError>>();

        let name_for_request = name.clone();
        manager.runtime().spawn(async move {
            let result = client.delete_file(&name_for_request).await;
            let _ = tx.send(result);
        });

        cx.to_async()
            .spawn(async move |async_cx| {
                let Some(result) = rx.recv().await else {
                    error!("[SHARE] Delete channel closed unexpectedly");
                    return;
                };

                let _ = async_cx.update(|cx| {
                    let lang = share_state.read(cx).language;
                    let succeeded = result.is_ok();

                    share_state.update(cx, |state, cx| {
                        match &result {
                            Ok(()) => {
                                info!("[SHARE] Delete completed: {}", name);
                                state.delete_phase = RequestPhase::Succeeded;
                            }
                            Err(e) => {
                                error!("[SHARE] Delete failed: {}", e);
                                state.delete_phase = RequestPhase::Failed;
                            }
                        }
                        // 无论成败都关闭确认对话框
                        if let Some(dialog) = state.delete_dialog.clone() {
                            dialog.update(cx, |dialog, cx| {
                                dialog.close();
                                cx.notify();
                            });
                        }
                        cx.notify();
                    });

                    // 成功提示中带上被删除的文件名
                    let (message, kind) = if succeeded {
                        (
                            format!("{}: {}", i18n::t(&lang, "share.delete.success"), name),
                            NotificationType::Success,
                        )
                    } else {
                        (
                            i18n::t(&lang, "share.delete.failed").to_string(),
                            NotificationType::Error,
                        )
                    };
                    push_transfer_notification(message, kind, cx);

                    // 删除成功后自动刷新清单
                    if succeeded {
                        share_state.update(cx, |state, cx| {
                            state.refresh_list(cx);
                        });
                    }
                });
            })
            .detach();
    }
}

/// 下载结果对应的提示文案键
/// 服务端错误统一提示文件不存在，本地写入失败单独区分
fn download_result_key(result: &Result<(), ApiError>) -> &'static str {
    match result {
        Ok(()) => "share.download.success",
        Err(ApiError::Io(_)) => "share.download.write_failed",
        Err(_) => "share.download.not_found",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_result_key_success() {
        assert_eq!(download_result_key(&Ok(())), "share.download.success");
    }

    #[test]
    fn test_download_result_key_collapses_server_errors() {
        let not_found = ApiError::Status {
            status: 404,
            body: String::new(),
        };
        let server_error = ApiError::Status {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(download_result_key(&Err(not_found)), "share.download.not_found");
        assert_eq!(
            download_result_key(&Err(server_error)),
            "share.download.not_found"
        );
    }

    #[test]
    fn test_download_result_key_distinguishes_local_write_failure() {
        let io = ApiError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(
            download_result_key(&Err(io)),
            "share.download.write_failed"
        );
    }
}
