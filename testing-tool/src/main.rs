use colored::*;
use reqwest::{Client, Method, StatusCode};
use serde_json::{json, Value};
use std::io::{self, Write};

type ToolResult<T> = Result<T, Box<dyn std::error::Error>>;

#[tokio::main]
async fn main() -> ToolResult<()> {
    println!("{}", "🗺️  Zones API Testing Tool".bright_blue().bold());
    println!("{}", "=====================================".bright_blue());
    println!();

    // Paso 1: Pedir la URL base del servicio
    let base_url = get_base_url()?;
    let client = Client::new();

    // Paso 2: Comprobar que el servicio responde
    request(&client, Method::GET, &base_url, None).await?;

    // Paso 3: Menú principal
    loop {
        println!();
        println!("{}", "📋 MENÚ PRINCIPAL".bright_green().bold());
        println!("{}", "==================".bright_green());
        println!("1. 📃 Listar zonas");
        println!("2. 🔍 Obtener zona");
        println!("3. ➕ Crear zona");
        println!("4. ✏️  Actualizar zona");
        println!("5. 🗑️  Eliminar zona");
        println!("6. 🚪 Salir");
        let choice = prompt("Selecciona una opción (1-6): ")?;

        let zones_url = format!("{}/zones", base_url);
        match choice.as_str() {
            "1" => {
                request(&client, Method::GET, &zones_url, None).await?;
            }
            "2" => {
                let id = prompt("ID de la zona: ")?;
                request(&client, Method::GET, &format!("{}/{}", zones_url, id), None).await?;
            }
            "3" => {
                let payload = zone_payload()?;
                request(&client, Method::POST, &zones_url, Some(payload)).await?;
            }
            "4" => {
                let id = prompt("ID de la zona: ")?;
                let payload = zone_payload()?;
                request(&client, Method::PUT, &format!("{}/{}", zones_url, id), Some(payload)).await?;
            }
            "5" => {
                let id = prompt("ID de la zona: ")?;
                request(&client, Method::DELETE, &format!("{}/{}", zones_url, id), None).await?;
            }
            "6" => {
                println!("{}", "👋 ¡Hasta luego!".bright_green());
                break;
            }
            _ => {
                println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red());
            }
        }
    }

    Ok(())
}

fn prompt(label: &str) -> ToolResult<String> {
    print!("{}", label.bright_yellow());
    io::stdout().flush()?;
    let mut value = String::new();
    io::stdin().read_line(&mut value)?;
    Ok(value.trim().to_string())
}

fn get_base_url() -> ToolResult<String> {
    println!("{}", "🌐 SERVIDOR".bright_cyan().bold());
    println!("{}", "===========".bright_cyan());

    let url = prompt("URL base (vacío = http://localhost:8000/api/v1): ")?;
    let url = if url.is_empty() {
        "http://localhost:8000/api/v1".to_string()
    } else {
        url
    };
    Ok(url.trim_end_matches('/').to_string())
}

/// Pedir name y region; region vacía se envía como null
fn zone_payload() -> ToolResult<Value> {
    let name = prompt("Nombre: ")?;
    let region = prompt("Región (vacío = null): ")?;
    let region = if region.is_empty() { Value::Null } else { Value::String(region) };
    Ok(json!({ "name": name, "region": region }))
}

async fn request(client: &Client, method: Method, url: &str, payload: Option<Value>) -> ToolResult<()> {
    println!();
    println!("{}", format!("📤 {} {}", method, url).bright_blue());
    if let Some(body) = &payload {
        println!("{}", "📦 Payload:".bright_blue());
        println!("{}", serde_json::to_string_pretty(body)?);
    }

    let mut builder = client.request(method, url);
    if let Some(body) = &payload {
        builder = builder.json(body);
    }

    let response = match builder.send().await {
        Ok(response) => response,
        Err(e) => {
            println!("{}", format!("❌ Error de conexión: {}", e).bright_red());
            return Ok(());
        }
    };

    let status = response.status();
    let status_line = format!("📥 Estado: {}", status);
    if status.is_success() {
        println!("{}", status_line.bright_green().bold());
    } else {
        println!("{}", status_line.bright_red().bold());
    }

    if status == StatusCode::NO_CONTENT {
        println!("{}", "(sin cuerpo)".dimmed());
        return Ok(());
    }

    let text = response.text().await?;
    match serde_json::from_str::<Value>(&text) {
        Ok(json_response) => {
            if let Some(zones) = json_response.get("data").and_then(Value::as_array) {
                println!("{}", format!("🗺️  ZONAS ENCONTRADAS: {} elementos", zones.len()).bright_green().bold());
            }
            println!("{}", serde_json::to_string_pretty(&json_response)?);
        }
        Err(_) => println!("{}", text),
    }

    Ok(())
}
