#[tokio::main]
async fn main() {
    planner_server::start_server().await;
}
