//! # Cashier REPL
//!
//! Line-oriented input loop for the sales counter. A bare line is treated
//! as a barcode scan (the scanner types into whatever has focus, and the
//! barcode box holds focus by default); everything else is a slash
//! command.
//!
//! ```text
//! <code>              scan a barcode, add one unit
//! /search [text]      search the catalog by name
//! /add <id>           add one unit of a catalog product
//! /qty <id> <value>   edit a queue line's quantity
//! /rm <id>            remove a queue line
//! /pay                submit the sale
//! /catalog  /queue    re-print the tables
//! /help     /quit
//! ```

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use mortar_api::PosApi;

use crate::actions::{dispatch, route, Change, ClickTarget, InputField, UiEvent};
use crate::error::TerminalError;
use crate::session::Session;
use crate::view::{render_catalog, render_queue};

const HELP: &str = "\
Commands:
  <code>             scan a barcode (adds one unit)
  /search [text]     search products by name
  /add <id>          add one unit of a catalog product
  /qty <id> <value>  set a queue line's quantity
  /rm <id>           remove a queue line
  /pay               submit the sale
  /catalog           show the catalog
  /queue             show the sales queue
  /help              show this help
  /quit              exit";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// A routed UI event.
    Event(UiEvent),
    ShowCatalog,
    ShowQueue,
    Help,
    Quit,
    Empty,
    Unrecognized(String),
}

/// Parses one input line.
///
/// A line without a leading slash goes to the barcode box, matching the
/// default focus of the original counter screen.
pub fn parse_line(line: &str) -> ReplCommand {
    let line = line.trim();
    if line.is_empty() {
        return ReplCommand::Empty;
    }

    if !line.starts_with('/') {
        return ReplCommand::Event(UiEvent::Input {
            field: InputField::Barcode,
            value: line.to_string(),
        });
    }

    let mut parts = line.splitn(2, char::is_whitespace);
    let command = parts.next().unwrap_or_default();
    let rest = parts.next().unwrap_or("").trim();

    match command {
        "/search" | "/s" => ReplCommand::Event(UiEvent::Input {
            field: InputField::ProductSearch,
            value: rest.to_string(),
        }),
        "/qty" => {
            let mut args = rest.splitn(2, char::is_whitespace);
            let id = args.next().unwrap_or_default();
            let value = args.next().unwrap_or("").trim();
            match id.parse::<i64>() {
                Ok(product_id) => ReplCommand::Event(UiEvent::Input {
                    field: InputField::QueueQuantity { product_id },
                    value: value.to_string(),
                }),
                Err(_) => ReplCommand::Unrecognized(line.to_string()),
            }
        }
        "/add" => match rest.parse::<i64>() {
            Ok(product_id) => ReplCommand::Event(UiEvent::Click {
                target: ClickTarget::AddButton { product_id },
            }),
            Err(_) => ReplCommand::Unrecognized(line.to_string()),
        },
        "/rm" | "/remove" => match rest.parse::<i64>() {
            Ok(product_id) => ReplCommand::Event(UiEvent::Click {
                target: ClickTarget::RemoveButton { product_id },
            }),
            Err(_) => ReplCommand::Unrecognized(line.to_string()),
        },
        "/pay" | "/submit" => ReplCommand::Event(UiEvent::Click {
            target: ClickTarget::CreateTransaction,
        }),
        "/catalog" => ReplCommand::ShowCatalog,
        "/queue" => ReplCommand::ShowQueue,
        "/help" => ReplCommand::Help,
        "/quit" | "/exit" => ReplCommand::Quit,
        _ => ReplCommand::Unrecognized(line.to_string()),
    }
}

/// Runs the input loop until EOF or `/quit`.
pub async fn run(session: &mut Session, api: &dyn PosApi) -> Result<(), TerminalError> {
    println!("Mortar POS terminal. Scan a barcode, or /help for commands.");
    prompt()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            ReplCommand::Empty => {}
            ReplCommand::Quit => break,
            ReplCommand::Help => println!("{}", HELP),
            ReplCommand::ShowCatalog => print!("{}", render_catalog(session.catalog())),
            ReplCommand::ShowQueue => {
                print!("{}", render_queue(session.queue(), session.grand_total()))
            }
            ReplCommand::Unrecognized(input) => {
                println!("Unrecognized command: {} (try /help)", input)
            }
            ReplCommand::Event(event) => {
                let outcome = dispatch(session, api, route(event)).await;

                if let Some(alert) = &outcome.alert {
                    println!("*** {} ***", alert);
                }

                match outcome.change {
                    Change::None => {}
                    Change::Catalog { count } => {
                        println!("{} product(s)", count);
                        print!("{}", render_catalog(session.catalog()));
                    }
                    Change::Queue => {
                        print!("{}", render_queue(session.queue(), session.grand_total()))
                    }
                    Change::SaleCompleted { lines } => {
                        println!("Sale completed ({} line(s)).", lines);
                        print!("{}", render_queue(session.queue(), session.grand_total()));
                    }
                }
            }
        }
        prompt()?;
    }

    Ok(())
}

fn prompt() -> Result<(), TerminalError> {
    print!("scan> ");
    std::io::stdout().flush()?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_line_is_a_barcode_scan() {
        assert_eq!(
            parse_line("6291041500213"),
            ReplCommand::Event(UiEvent::Input {
                field: InputField::Barcode,
                value: "6291041500213".to_string(),
            })
        );
    }

    #[test]
    fn test_search_keeps_raw_query() {
        assert_eq!(
            parse_line("/search  paracetamol 500"),
            ReplCommand::Event(UiEvent::Input {
                field: InputField::ProductSearch,
                value: "paracetamol 500".to_string(),
            })
        );

        // Empty query lists everything.
        assert_eq!(
            parse_line("/search"),
            ReplCommand::Event(UiEvent::Input {
                field: InputField::ProductSearch,
                value: String::new(),
            })
        );
    }

    #[test]
    fn test_qty_preserves_garbage_values() {
        // The lenient quantity parse happens in the queue, not here.
        assert_eq!(
            parse_line("/qty 3 abc"),
            ReplCommand::Event(UiEvent::Input {
                field: InputField::QueueQuantity { product_id: 3 },
                value: "abc".to_string(),
            })
        );
    }

    #[test]
    fn test_click_commands() {
        assert_eq!(
            parse_line("/add 7"),
            ReplCommand::Event(UiEvent::Click {
                target: ClickTarget::AddButton { product_id: 7 }
            })
        );
        assert_eq!(
            parse_line("/rm 7"),
            ReplCommand::Event(UiEvent::Click {
                target: ClickTarget::RemoveButton { product_id: 7 }
            })
        );
        assert_eq!(
            parse_line("/pay"),
            ReplCommand::Event(UiEvent::Click {
                target: ClickTarget::CreateTransaction
            })
        );
    }

    #[test]
    fn test_unrecognized_and_empty() {
        assert_eq!(parse_line("   "), ReplCommand::Empty);
        assert!(matches!(parse_line("/add seven"), ReplCommand::Unrecognized(_)));
        assert!(matches!(parse_line("/nope"), ReplCommand::Unrecognized(_)));
    }
}
