use std::io::{self, BufRead, Write};
use std::time::Duration;

use contact_app::logging::{self, LogDestination};
use contact_app::ContactSession;
use contact_client::ClientSettings;
use contact_core::Msg;

const PUMP_DEADLINE: Duration = Duration::from_secs(5);
const PUMP_QUIET: Duration = Duration::from_millis(200);

fn main() {
    logging::initialize(LogDestination::File);

    let mut settings = ClientSettings::default();
    if let Ok(base_url) = std::env::var("CONTACT_BOOK_URL") {
        settings.base_url = base_url;
    }

    let mut session = match ContactSession::new(settings) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("Could not start contact book client: {err}");
            std::process::exit(1);
        }
    };

    session.start();
    session.pump(PUMP_DEADLINE, PUMP_QUIET);
    render(&mut session);
    print_help();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        let mut parts = line.trim().splitn(2, ' ');
        let command = parts.next().unwrap_or("");
        let argument = parts.next().unwrap_or("").to_string();

        match command {
            "" => {}
            "name" => session.dispatch(Msg::NameChanged(argument)),
            "email" => session.dispatch(Msg::EmailChanged(argument)),
            "submit" => session.dispatch(Msg::SubmitClicked),
            "delete" => session.dispatch(Msg::DeleteClicked { email: argument }),
            "refresh" => session.dispatch(Msg::Started),
            "quit" => break,
            "help" => print_help(),
            other => println!("Unknown command: {other}"),
        }

        session.pump(PUMP_DEADLINE, PUMP_QUIET);
        render(&mut session);
    }
}

fn render(session: &mut ContactSession) {
    if !session.consume_dirty() {
        return;
    }
    let view = session.view();

    println!();
    if view.contacts.is_empty() {
        println!("No contacts yet. Add someone!");
    } else {
        for row in &view.contacts {
            println!("  {} <{}>", row.name, row.email);
        }
    }
    if !view.error_message.is_empty() {
        println!("! {}", view.error_message);
    }
    if view.submitting {
        println!("Adding...");
    }
    let _ = io::stdout().flush();
}

fn print_help() {
    println!("Commands: name <value> | email <value> | submit | delete <email> | refresh | quit");
}
