use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use quizwheel::middleware::request_trace::RequestTrace;
use quizwheel::middleware::structured_logger::StructuredLogger;
use quizwheel::routes;
use quizwheel::state::app_state::AppState;

/// Type alias for route configuration functions
type RouteConfigFn = Box<dyn Fn(&mut web::ServiceConfig) + Send + Sync>;

/// Builder for creating test Actix service instances
pub struct TestAppBuilder {
    state: web::Data<AppState>,
    route_config: RouteConfigFn,
}

impl TestAppBuilder {
    pub fn new(state: web::Data<AppState>) -> Self {
        Self {
            state,
            route_config: Box::new(routes::configure),
        }
    }

    /// Replace the production routes with `config_fn`.
    pub fn with_routes<F>(mut self, config_fn: F) -> Self
    where
        F: Fn(&mut web::ServiceConfig) + Send + Sync + 'static,
    {
        self.route_config = Box::new(config_fn);
        self
    }

    /// Build the test service with the production middleware stack.
    pub async fn build(
        self,
    ) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
        let route_config = self.route_config;

        test::init_service(
            App::new()
                .wrap(RequestTrace)
                .wrap(StructuredLogger)
                .app_data(self.state)
                .configure(move |cfg| route_config(cfg)),
        )
        .await
    }
}

/// Takes shared state so a test can keep a handle on what the app serves.
pub fn create_test_app(state: web::Data<AppState>) -> TestAppBuilder {
    TestAppBuilder::new(state)
}
