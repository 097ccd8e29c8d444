use std::collections::VecDeque;

use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::Cmd,
        cmd_executor::CmdExecutor,
        msg::Msg,
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::update,
    },
    infrastructure::tmdb_service::TmdbCommand,
};

/// Owns the application state and drives the translate/update/execute cycle
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: Option<CmdExecutor>,
}

impl Runtime {
    /// Create a runtime without a command executor; commands only queue up
    pub fn new(initial_state: AppState) -> Self {
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();

        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor: None,
        }
    }

    pub fn new_with_executor(initial_state: AppState, executor: CmdExecutor) -> Self {
        Self {
            cmd_executor: Some(executor),
            ..Self::new(initial_state)
        }
    }

    /// Create a runtime whose fetch commands go to a TMDB worker
    pub fn new_with_tmdb_executor(
        initial_state: AppState,
        tmdb_sender: mpsc::UnboundedSender<TmdbCommand>,
    ) -> Self {
        Self::new_with_executor(initial_state, CmdExecutor::new_with_tmdb(tmdb_sender))
    }

    pub fn executor_mut(&mut self) -> Option<&mut CmdExecutor> {
        self.cmd_executor.as_mut()
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Sender handed to background workers (the TMDB service)
    pub fn get_raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    /// Drain the commands produced since the last call
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>, String> {
        let commands = self.pending_commands();
        let Some(executor) = &self.cmd_executor else {
            return Err(
                "No command executor available. Use new_with_executor() to configure.".to_string(),
            );
        };
        if commands.is_empty() {
            return Ok(vec![]);
        }

        executor
            .execute_commands(&commands)
            .map_err(|e| format!("Command execution failed: {e}"))
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            log::debug!("update: {msg:?}");
        }
        let state = std::mem::take(&mut self.state);
        let (new_state, commands) = update(msg, state);
        self.state = new_state;

        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Translate queued and received raw messages, then apply every domain message
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
            self.msg_queue.extend(domain_msgs);
        }

        while let Ok(raw_msg) = self.raw_msg_rx.try_recv() {
            let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
            self.msg_queue.extend(domain_msgs);
        }

        while let Some(msg) = self.msg_queue.pop_front() {
            let commands = self.process_message(msg);
            all_commands.extend(commands);
        }

        all_commands
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Result<Vec<String>, String> {
        self.process_all_messages();
        self.execute_pending_commands()
    }

    pub fn get_stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_raw_messages: self.raw_msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            listed_movies: self.state.catalog.movies.len(),
            favorites: self.state.favorites.len(),
            navigation_depth: self.state.navigation.depth(),
            has_executor: self.cmd_executor.is_some(),
            has_tmdb_support: self
                .cmd_executor
                .as_ref()
                .is_some_and(|executor| executor.get_stats().has_tmdb_sender),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_raw_messages: usize,
    pub queued_commands: usize,
    pub listed_movies: usize,
    pub favorites: usize,
    pub navigation_depth: usize,
    pub has_executor: bool,
    pub has_tmdb_support: bool,
}
