use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing,
};
use poem_openapi::OpenApiService;

use crate::api::receipt::routes::scan_receipt;
use crate::{config::server_config::ServerConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: ServerConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.bind_address();
        let app = Self::routes(container, addr.clone());
        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Receipt scan at http://{}/scan", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }

    /// Builds the route tree: `/scan`, `/api/health`, `/docs` and `/openapi.json`.
    pub fn routes(container: DependencyContainer, addr: String) -> impl Endpoint {
        let api_service = OpenApiService::new(
            container.health_api,
            "Receipt Scanner API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}/api", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        Route::new()
            .at("/scan", scan_receipt.data(container.scan_receipt_use_case))
            .nest("/api", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(Tracing)
    }
}
