use crate::config::ServerConfig;
use crate::notify::dispatcher::Dispatcher;

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Dispatcher,
    pub server_config: Option<ServerConfig>,
}
