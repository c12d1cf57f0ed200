use anyhow::{Context, Result};
use colored::*;
use serde_json::{json, Value};
use std::io::{self, Write};

const DEFAULT_BASE_URL: &str = "http://localhost:3001";

#[tokio::main]
async fn main() -> Result<()> {
    println!("{}", "🚗 Showroom Testing Tool".bright_blue().bold());
    println!("{}", "=====================================".bright_blue());
    println!();

    let base_url = std::env::var("SHOWROOM_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let base_url = base_url.trim_end_matches('/').to_string();
    println!("{} {}", "🌐 Servidor:".bright_cyan(), base_url);

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .context("no se pudo crear el cliente HTTP")?;

    loop {
        println!();
        println!("{}", "📋 MENÚ PRINCIPAL".bright_green().bold());
        println!("{}", "==================".bright_green());
        println!("1. ❤️  Health check");
        println!("2. 🔍 Búsqueda en lenguaje natural");
        println!("3. 💰 Calcular pago");
        println!("4. 💬 Chat con el asistente");
        println!("5. 🚪 Salir");

        let choice = prompt("Selecciona una opción (1-5): ")?;
        let outcome = match choice.as_str() {
            "1" => check_health(&client, &base_url).await,
            "2" => test_search(&client, &base_url).await,
            "3" => test_payment(&client, &base_url).await,
            "4" => test_chat(&client, &base_url).await,
            "5" => {
                println!("{}", "👋 ¡Hasta luego!".bright_green());
                break;
            }
            _ => {
                println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red());
                continue;
            }
        };

        if let Err(e) = outcome {
            println!("{} {:#}", "❌ Error:".bright_red().bold(), e);
        }
    }

    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label.bright_yellow());
    io::stdout().flush()?;
    let mut value = String::new();
    io::stdin().read_line(&mut value)?;
    Ok(value.trim().to_string())
}

fn prompt_number(label: &str, default: f64) -> Result<f64> {
    let raw = prompt(&format!("{} [{}]: ", label, default))?;
    if raw.is_empty() {
        return Ok(default);
    }
    raw.parse()
        .with_context(|| format!("'{}' no es un número válido", raw))
}

async fn send(request: reqwest::RequestBuilder) -> Result<Value> {
    let response = request.send().await.context("el servidor no responde")?;
    let status = response.status();
    let body: Value = response.json().await.context("respuesta no es JSON")?;

    let label = format!("📡 Status: {}", status);
    if status.is_success() {
        println!("{}", label.bright_green());
    } else {
        println!("{}", label.bright_red());
    }
    Ok(body)
}

async fn check_health(client: &reqwest::Client, base_url: &str) -> Result<()> {
    let body = send(client.get(format!("{}/health", base_url))).await?;
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

async fn test_search(client: &reqwest::Client, base_url: &str) -> Result<()> {
    let query = prompt("Consulta (ej: hybrid SUVs under $40,000): ")?;
    let body = send(
        client
            .post(format!("{}/api/vehicles/search", base_url))
            .json(&json!({ "query": query })),
    )
    .await?;

    println!("{}", "🧩 Filtros:".bright_blue());
    println!("{}", serde_json::to_string_pretty(&body["filters"])?);
    println!("{} {}", "🚙 Resultados:".bright_blue(), body["count"]);

    if let Some(vehicles) = body["vehicles"].as_array() {
        for vehicle in vehicles {
            println!(
                "   • {} {} - ${} ({} MPG, {})",
                vehicle["make"].as_str().unwrap_or("?"),
                vehicle["model"].as_str().unwrap_or("?"),
                vehicle["price"],
                vehicle["mpg"],
                vehicle["type"].as_str().unwrap_or("?")
            );
        }
    }
    Ok(())
}

async fn test_payment(client: &reqwest::Client, base_url: &str) -> Result<()> {
    let price = prompt_number("Precio", 30000.0)?;
    let down_payment = prompt_number("Entrada", 5000.0)?;
    let apr = prompt_number("APR %", 5.0)?;
    let term_months = prompt_number("Plazo (meses)", 60.0)? as u32;
    let kind = prompt("Tipo (buy/lease/subscription) [buy]: ")?;

    let payload = json!({
        "price": price,
        "downPayment": down_payment,
        "apr": apr,
        "termMonths": term_months,
        "isLease": kind == "lease",
        "isSubscription": kind == "subscription",
    });

    println!("{}", "📦 Payload:".bright_blue());
    println!("{}", serde_json::to_string_pretty(&payload)?);

    let body = send(
        client
            .post(format!("{}/api/calculate-payment", base_url))
            .json(&payload),
    )
    .await?;

    println!(
        "{} ${} / mes, total ${}",
        "💰 Resultado:".bright_blue().bold(),
        body["monthlyPayment"],
        body["totalCost"]
    );
    println!("{}", serde_json::to_string_pretty(&body["breakdown"])?);
    Ok(())
}

async fn test_chat(client: &reqwest::Client, base_url: &str) -> Result<()> {
    println!("{}", "💬 Escribe 'salir' para volver al menú".bright_cyan());
    let mut history: Vec<Value> = Vec::new();

    loop {
        let message = prompt("Tú: ")?;
        if message.eq_ignore_ascii_case("salir") {
            return Ok(());
        }

        let body = send(
            client.post(format!("{}/api/chat", base_url)).json(&json!({
                "message": message,
                "conversationHistory": history,
            })),
        )
        .await?;

        let reply = body["response"].as_str().unwrap_or_default().to_string();
        println!("{} {}", "🤖".bright_magenta(), reply);
        println!(
            "{} {}",
            "   acción:".dimmed(),
            body["action"].as_str().unwrap_or("?")
        );

        history.push(json!({ "from": "user", "text": message }));
        history.push(json!({ "from": "bot", "text": reply }));
    }
}
