// Fakes em memória para os testes de host

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::models::session::Session;
use crate::services::api_client::ApiClient;
use crate::services::http::{HttpRequest, HttpResponse, HttpTransport};
use crate::services::navigator::RecordingNavigator;
use crate::state::app_state::AppState;
use crate::utils::storage::MemoryStorage;

type Handler = Box<dyn Fn(&HttpRequest) -> Result<HttpResponse, String>>;

pub struct MockTransport {
    handler: Handler,
    requests: RefCell<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new(handler: impl Fn(&HttpRequest) -> Result<HttpResponse, String> + 'static) -> Self {
        Self {
            handler: Box::new(handler),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.borrow().last().cloned()
    }
}

#[async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        self.requests.borrow_mut().push(request.clone());
        (self.handler)(&request)
    }
}

pub fn json_response(status: u16, body: &str) -> Result<HttpResponse, String> {
    Ok(HttpResponse {
        status,
        body: body.to_string(),
    })
}

pub fn test_config() -> AppConfig {
    AppConfig {
        api_base_url: "http://api.test".to_string(),
        ..AppConfig::default()
    }
}

/// Estado completo ligado a fakes
pub struct Harness {
    pub storage: Rc<MemoryStorage>,
    pub transport: Rc<MockTransport>,
    pub navigator: Rc<RecordingNavigator>,
    pub state: AppState,
    pub api: ApiClient,
}

impl Harness {
    pub fn new(handler: impl Fn(&HttpRequest) -> Result<HttpResponse, String> + 'static) -> Self {
        let storage = Rc::new(MemoryStorage::new());
        let transport = Rc::new(MockTransport::new(handler));
        let navigator = Rc::new(RecordingNavigator::new());
        let state = AppState::new(
            storage.clone(),
            transport.clone(),
            navigator.clone(),
            &test_config(),
        );
        let api = state.api.clone();
        Self {
            storage,
            transport,
            navigator,
            state,
            api,
        }
    }

    pub fn login(&self, session: Session) {
        self.state
            .session
            .create(&session)
            .expect("session should persist in memory");
    }
}
