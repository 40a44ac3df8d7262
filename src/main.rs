/*
Author      : Seunghwan Shin
Create date : 2025-11-00
Description : HTTP reporting API over the energy/climate warehouse.

History     : 2025-11-00 Seunghwan Shin       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod repository;
use repository::{fs_artifact_store::*, warehouse_repository_impl::*};

mod env_configuration;

mod errors;

mod traits;

mod model;
use model::configs::{server_config::*, system_config::*, total_config::*};

mod dto;

mod enums;

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{
    chart_service_impl::*, export_service_impl::*, forecast_service_impl::*, query_service_impl::*,
};

mod controller;
use controller::energy_controller::*;

#[tokio::main]
async fn main() {
    /* 전역로거 설정 및 초기 설정 */
    dotenv().ok();
    set_global_logger();

    info!("Energy data API start!");

    /* Warehouse connection */
    let warehouse_conn: WarehouseRepositoryImpl =
        WarehouseRepositoryImpl::new(get_warehouse_config_info()).unwrap_or_else(|e| {
            let err_msg: &str = "[main] An issue occurred while initializing warehouse_conn.";
            error!("{} {:?}", err_msg, e);
            panic!("{} {:?}", err_msg, e)
        });

    let system_config: &'static SystemConfig = get_system_config_info();

    /* 의존 주입 */
    let query_service: QueryServiceImpl<WarehouseRepositoryImpl> =
        QueryServiceImpl::new(Arc::new(warehouse_conn));
    let forecast_service: ForecastServiceImpl = ForecastServiceImpl::new();
    let chart_service: ChartServiceImpl = ChartServiceImpl::new(Arc::new(FsArtifactStore::new(
        PathBuf::from(system_config.graph_dir()),
    )));
    let export_service: ExportServiceImpl = ExportServiceImpl::new(Arc::new(FsArtifactStore::new(
        PathBuf::from(system_config.export_dir()),
    )));

    let app_state: AppState = AppState::new(
        Arc::new(query_service),
        Arc::new(forecast_service),
        Arc::new(chart_service),
        Arc::new(export_service),
    );

    let server_config: &'static ServerConfig = get_server_config_info();
    let bind_addr: String = format!(
        "{}:{}",
        server_config.listen_host(),
        server_config.listen_port()
    );

    let listener: tokio::net::TcpListener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| {
            let err_msg: &str = "[main] Failed to bind the listen address.";
            error!("{} {} {:?}", err_msg, bind_addr, e);
            panic!("{} {} {:?}", err_msg, bind_addr, e)
        });

    info!("Listening on {}", bind_addr);

    axum::serve(listener, build_router(app_state))
        .await
        .unwrap_or_else(|e| {
            error!("{:?}", e);
            panic!("{:?}", e)
        });
}
