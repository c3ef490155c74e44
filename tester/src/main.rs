use anyhow::Result;
use planner_client::{
    config::Config,
    form::{Notification, ProgramPlanForm},
};
use reqwest::Client;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load();

    let mut form = ProgramPlanForm::new();
    form.set_category("FDP");
    form.set_program_type("Online");
    form.set_count("5");

    let outcome = form.submit(&Client::new(), &config.base_url).await;
    println!("{}", Notification::for_outcome(&outcome).message());

    let ack = outcome?;
    println!("Server says: {}", ack.message);

    Ok(())
}
