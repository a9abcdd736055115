use std::env;

use serde_json::Value;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const BLUE: &str = "\x1b[38;5;75m";
const GREEN: &str = "\x1b[38;5;78m";
const ORANGE: &str = "\x1b[38;5;208m";
const RED: &str = "\x1b[38;5;203m";
const PURPLE: &str = "\x1b[38;5;141m";
const GRAY: &str = "\x1b[38;5;243m";
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub async fn run(once: bool) {
    let port = env::var("STUDIO_DESK_PORT").unwrap_or_else(|_| "5000".into());
    let url = format!("http://127.0.0.1:{port}/api/admin/data");

    let client = reqwest::Client::new();

    loop {
        if !once {
            print!("{CLEAR_SCREEN}");
        }

        match client.get(&url).send().await {
            Ok(resp) if resp.status().is_success() => match resp.json::<Value>().await {
                Ok(data) => print!("{}", render(&data)),
                Err(e) => {
                    eprintln!("failed to parse response: {e}");
                    if once {
                        std::process::exit(1);
                    }
                }
            },
            Ok(resp) => {
                eprintln!("server returned {}", resp.status());
                if once {
                    std::process::exit(1);
                }
            }
            Err(e) => {
                eprintln!("{RED}connection failed:{RESET} {e}");
                eprintln!("{DIM}is studio-desk running?{RESET}");
                if once {
                    std::process::exit(1);
                }
            }
        }

        if once {
            break;
        }

        println!();
        println!("{DIM}refreshing every 2s, Ctrl+C to exit{RESET}");
        tokio::time::sleep(std::time::Duration::from_secs(2)).await;
    }
}

fn label_color(label: &str) -> &'static str {
    match label {
        "Mới" => BLUE,
        "Hoàn thành" => GREEN,
        "Đã xử lý" | "Chờ phản hồi" => ORANGE,
        _ => PURPLE,
    }
}

/// Tickets grouped under each registered label, in registry order. Tickets
/// whose label is no longer registered are listed after the rest.
fn render(data: &Value) -> String {
    let empty = Vec::new();
    let tickets = data["messages"].as_array().unwrap_or(&empty);
    let mut labels: Vec<&str> = data["labels"]
        .as_array()
        .unwrap_or(&empty)
        .iter()
        .filter_map(Value::as_str)
        .collect();
    for t in tickets {
        if let Some(label) = t["label"].as_str() {
            if !labels.contains(&label) {
                labels.push(label);
            }
        }
    }

    let mut out = String::new();
    out.push_str(&format!("{BOLD}{BLUE}studio-desk board{RESET}\n"));
    out.push_str(&format!(
        "{DIM}─────────────────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "{BOLD}{} ticket{}{RESET}\n\n",
        tickets.len(),
        if tickets.len() == 1 { "" } else { "s" }
    ));

    for label in labels {
        let group: Vec<&Value> = tickets
            .iter()
            .filter(|t| t["label"].as_str() == Some(label))
            .collect();
        let color = label_color(label);
        if group.is_empty() {
            out.push_str(&format!("{DIM}{label} (0){RESET}\n\n"));
            continue;
        }
        out.push_str(&format!("{BOLD}{color}● {label} ({}){RESET}\n", group.len()));
        for t in group {
            let id = t["id"].as_u64().unwrap_or(0);
            let name = t["customer_name"].as_str().unwrap_or("?");
            let date = t["shoot_date"].as_str().unwrap_or("");
            let link = t["image_link"].as_str().unwrap_or("");
            out.push_str(&format!("  {BOLD}#{id}{RESET}  {name}  {GRAY}{date}{RESET}\n"));
            out.push_str(&format!("  {GRAY}{link}{RESET}\n"));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut in_escape = false;
        for c in s.chars() {
            match (in_escape, c) {
                (false, '\x1b') => in_escape = true,
                (true, c) if c.is_ascii_alphabetic() => in_escape = false,
                (true, _) => {}
                (false, c) => out.push(c),
            }
        }
        out
    }

    #[test]
    fn groups_by_label_in_registry_order() {
        let data = json!({
            "labels": ["Mới", "Hoàn thành"],
            "messages": [
                {"id": 1, "customer_name": "Anna", "shoot_date": "2024-01-01",
                 "image_link": "http://x/1.jpg", "label": "Hoàn thành"},
                {"id": 2, "customer_name": "Bình", "shoot_date": "2024-02-01",
                 "image_link": "http://x/2.jpg", "label": "Mới"},
            ]
        });
        let out = strip_ansi(&render(&data));
        assert!(out.contains("2 tickets"));
        let new_at = out.find("● Mới (1)").unwrap();
        let done_at = out.find("● Hoàn thành (1)").unwrap();
        assert!(new_at < done_at);
        assert!(out.contains("#2  Bình  2024-02-01"));
    }

    #[test]
    fn unregistered_label_still_listed() {
        let data = json!({
            "labels": ["Mới"],
            "messages": [{"id": 3, "customer_name": "C", "label": "Đã xóa"}]
        });
        let out = strip_ansi(&render(&data));
        assert!(out.contains("Mới (0)"));
        assert!(out.contains("● Đã xóa (1)"));
    }

    #[test]
    fn empty_board() {
        let out = strip_ansi(&render(&json!({})));
        assert!(out.contains("0 tickets"));
    }
}
