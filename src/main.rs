use order_pipeline::lifecycle::{setup_tracing, AppConfig, OrderSystem};
use order_pipeline::model::OrderRequest;
use tokio::io::AsyncReadExt;
use tracing::{error, info, Instrument};

/// Reads an order request (JSON) from the file given as the first argument, or
/// from stdin, places it, and prints the resulting order.
#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = AppConfig::from_env().map_err(|e| e.to_string())?;
    info!(
        products = %config.products_file.display(),
        coupon_sources = config.coupon_files.len(),
        "Starting order pipeline"
    );

    let request = read_request(std::env::args().nth(1))
        .await
        .map_err(|e| format!("Failed to read order request: {e}"))?;

    let system = OrderSystem::from_config(&config).await;

    let span = tracing::info_span!("order_placement");
    let result = async {
        info!(items = request.items.len(), "Placing order");
        system.order_client.place_order(request).await
    }
    .instrument(span)
    .await;

    let outcome = match result {
        Ok(order) => {
            info!(order_id = %order.id, "Order placed successfully");
            serde_json::to_string_pretty(&order)
                .map(|json| println!("{json}"))
                .map_err(|e| e.to_string())
        }
        Err(e) => {
            error!(error = %e, kind = ?e.kind(), "Order rejected");
            Err(e.to_string())
        }
    };

    system.shutdown().await?;
    outcome
}

async fn read_request(path: Option<String>) -> Result<OrderRequest, String> {
    let raw = match path {
        Some(path) => tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| format!("{path}: {e}"))?,
        None => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .map_err(|e| e.to_string())?;
            buf
        }
    };
    serde_json::from_str(&raw).map_err(|e| e.to_string())
}
