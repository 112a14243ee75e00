use axum::Router;
use tokio::net::TcpListener;

use crate::api::ApiClient;

/// Serve `router` on an ephemeral local port and point a client at it.
pub(crate) async fn serve(router: Router) -> ApiClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    ApiClient::new(format!("http://{}/api", addr))
}
