// 文件清单加载：从服务端拉取清单并整体替换

use tracing::{error, info};

use super::{push_window_notification, ShareState};
use crate::api::ApiManager;
use crate::i18n;
use crate::models::share::RequestPhase;

impl ShareState {
    /// 刷新服务端文件清单
    /// 成功时整体替换本地清单；任何失败都回退到空清单并提示一次错误
    pub fn refresh_list(&mut self, cx: &mut gpui::Context<Self>) {
        if self.list_phase.is_in_flight() {
            info!("[SHARE] Refresh already in flight, ignoring");
            return;
        }
        info!("[SHARE] Refreshing file list");

        self.list_phase = RequestPhase::InFlight;
        cx.notify();

        let share_state = cx.entity().clone();
        let manager = ApiManager::global();
        let client = manager.client();

        let (tx, mut rx) =
            tokio::sync::mpsc::unbounded_channel::<Result<Vec<String>, String>>();

        manager.runtime().spawn(async move {
            let result = client.list_files().await.map_err(|e| e.to_string());
            let _ = tx.send(result);
        });

        cx.to_async()
            .spawn(async move |async_cx| {
                let Some(result) = rx.recv().await else {
                    error!("[SHARE] List channel closed unexpectedly");
                    return;
                };

                let _ = async_cx.update(|cx| {
                    let lang = share_state.read(cx).language;
                    let failed = result.is_err();

                    share_state.update(cx, |state, cx| {
                        match result {
                            Ok(names) => {
                                info!("[SHARE] Loaded {} files", names.len());
                                state.replace_inventory(names);
                            }
                            Err(e) => {
                                error!("[SHARE] Failed to load file list: {}", e);
                                state.clear_inventory();
                            }
                        }
                        cx.notify();
                    });

                    if failed {
                        push_window_notification(
                            i18n::t(&lang, "share.list.failed").to_string(),
                            gpui_component::notification::NotificationType::Error,
                            cx,
                        );
                    }
                });
            })
            .detach();
    }
}
