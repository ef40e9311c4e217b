use std::io::{self, BufRead, Write};

use subscription_accounting::adapters::config::accounting_config::AccountingConfig;
use subscription_accounting::application::recorder::ExpenseRecorder;
use subscription_accounting::domain::subscription::{Amount, Subscription};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match AccountingConfig::load() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!("Could not load configuration: {}", error);
            return;
        }
    };

    let recorder = ExpenseRecorder::new(config);

    if !recorder.test_connection().await {
        println!("❌ Could not connect to the accounting sheets");
        return;
    }
    println!("✅ Connected to both accounting sheets");

    print!("Register a test expense in both sheets? (y/n): ");
    io::stdout().flush().ok();
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return;
    }
    if !matches!(answer.trim().to_lowercase().as_str(), "y" | "s") {
        return;
    }

    let test_subscription = Subscription {
        detalle: Some("Suscripción de Prueba".to_string()),
        categoria: Some("Prueba".to_string()),
        monto_cop: Amount::Text("$100.000".to_string()),
        monto_usd: Amount::Text("$25".to_string()),
    };

    if recorder.register_expenses(&[test_subscription]).await {
        println!("✅ Test expense registered in both sheets");
    } else {
        println!("❌ Failed to register the test expense");
    }
}
