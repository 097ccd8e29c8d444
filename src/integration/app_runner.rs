use std::sync::Arc;

use color_eyre::eyre::{eyre, Result};
use tokio::{
    sync::{mpsc, Mutex},
    task::JoinHandle,
};
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        cmd::TuiCommand,
        cmd_executor::CmdExecutor,
        msg::{navigation::NavMsg, system::SystemMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::category::ListCategory,
    infrastructure::{
        config::Config,
        tmdb::{TmdbApi, TmdbClient},
        tmdb_service::TmdbService,
        tui::{self, TuiLike},
    },
    integration::{coalescer::Coalescer, renderer::Renderer, runtime::Runtime},
};

/// Drives the application: terminal events in, TMDB responses in, frames out.
/// The terminal is injected so tests can run the whole loop against `TestTui`.
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn TuiLike + Send>>,
    renderer: Renderer,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    tmdb_cancel: CancellationToken,
    tmdb_task: Option<JoinHandle<()>>,
    initial_category: ListCategory,
}

impl AppRunner {
    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Build a runner talking to TMDB with the configured key and base URL
    pub async fn new_with_config(
        config: Config,
        initial_category: Option<ListCategory>,
        tui: Arc<Mutex<dyn TuiLike + Send>>,
    ) -> Result<Self> {
        let api_key = config
            .tmdb
            .api_key
            .clone()
            .ok_or_else(|| eyre!("TMDB api key is not configured"))?;
        let client = TmdbClient::with_base_url(api_key, config.tmdb.base_url.clone());
        Self::new_with_api(config, initial_category, Arc::new(client), tui).await
    }

    /// Build a runner on top of any [`TmdbApi`]; the worker is started here
    pub async fn new_with_api(
        config: Config,
        initial_category: Option<ListCategory>,
        api: Arc<dyn TmdbApi>,
        tui: Arc<Mutex<dyn TuiLike + Send>>,
    ) -> Result<Self> {
        let initial_category =
            initial_category.unwrap_or_else(|| config.default_category.clone());
        let state = AppState::new_with_config(initial_category.clone(), config);

        let mut runtime = Runtime::new_with_executor(state, CmdExecutor::new());
        let (tmdb_tx, tmdb_cancel, tmdb_service) = TmdbService::new(api, runtime.get_raw_sender());
        let tmdb_task = tmdb_service.run();

        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        if let Some(executor) = runtime.executor_mut() {
            executor.set_tmdb_sender(tmdb_tx);
            executor.set_tui_sender(tui_cmd_tx);
        }

        Ok(Self {
            runtime,
            tui,
            renderer: Renderer::new(),
            tui_cmd_rx,
            tmdb_cancel,
            tmdb_task: Some(tmdb_task),
            initial_category,
        })
    }

    /// Run until the user quits or the terminal stops producing events
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        self.runtime.send_msg(Msg::Nav(NavMsg::ShowCategory(
            self.initial_category.clone(),
        )));

        let result = self.main_loop().await;

        self.shutdown().await;
        self.tui.lock().await.exit()?;
        result
    }

    async fn main_loop(&mut self) -> Result<()> {
        let mut first_frame = true;
        let mut saw_render_event = false;
        let mut handled_input = false;

        loop {
            if let Err(e) = self.runtime.run_update_cycle() {
                log::error!("Runtime error: {e}");
            }

            let resized = self.apply_tui_commands().await?;

            if self.runtime.state().system.should_quit {
                break;
            }

            if self.runtime.state().system.should_suspend {
                {
                    let mut tui = self.tui.lock().await;
                    tui.suspend()?;
                    tui.resume()?;
                }
                self.runtime.send_msg(Msg::System(SystemMsg::Resume));
                first_frame = true;
                continue;
            }

            if Coalescer::decide_render(first_frame, saw_render_event, handled_input || resized) {
                self.renderer
                    .render(&self.tui, self.runtime.state())
                    .await?;
                first_frame = false;
            }

            let event = {
                let mut tui = self.tui.lock().await;
                tui.next().await
            };
            let Some(event) = event else {
                log::info!("Terminal event stream ended");
                break;
            };

            saw_render_event = matches!(event, tui::Event::Render);
            handled_input = self.handle_event(event);
        }

        Ok(())
    }

    /// Forward a terminal event to the runtime. Returns whether it was input
    /// that could change the screen.
    fn handle_event(&mut self, event: tui::Event) -> bool {
        match event {
            tui::Event::Key(key) => {
                self.runtime.send_raw_msg(RawMsg::Key(key));
                true
            }
            tui::Event::Resize(w, h) => {
                self.runtime.send_raw_msg(RawMsg::Resize(w, h));
                true
            }
            tui::Event::Quit | tui::Event::Closed => {
                self.runtime.send_raw_msg(RawMsg::Quit);
                true
            }
            tui::Event::Tick => {
                self.runtime.send_raw_msg(RawMsg::Tick);
                false
            }
            tui::Event::Render => {
                self.runtime.send_raw_msg(RawMsg::Render);
                false
            }
            tui::Event::Error => {
                self.runtime
                    .send_raw_msg(RawMsg::Error("terminal event error".to_string()));
                false
            }
            tui::Event::Init
            | tui::Event::FocusGained
            | tui::Event::FocusLost
            | tui::Event::Paste(_)
            | tui::Event::Mouse(_) => false,
        }
    }

    async fn apply_tui_commands(&mut self) -> Result<bool> {
        let mut sizes = Vec::new();
        while let Ok(cmd) = self.tui_cmd_rx.try_recv() {
            match cmd {
                TuiCommand::Resize { width, height } => sizes.push((width, height)),
            }
        }

        match Coalescer::decide_resize(&sizes) {
            Some((width, height)) => {
                self.tui
                    .lock()
                    .await
                    .resize(ratatui::prelude::Rect::new(0, 0, width, height))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn shutdown(&mut self) {
        self.tmdb_cancel.cancel();
        if let Some(task) = self.tmdb_task.take() {
            if let Err(e) = task.await {
                log::warn!("TMDB worker did not stop cleanly: {e}");
            }
        }
    }
}
