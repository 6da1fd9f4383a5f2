use std::io::{self, Write};

use clap::Parser;

use crate::domain::Contact;
use crate::errors::AppError;

/// Program options. The session itself is interactive; flags only shape how
/// results are rendered.
#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "In-memory contact book")]
pub struct Cli {
    /// Render search and view output as JSON lines
    #[arg(long)]
    pub json: bool,
}

pub enum Command {
    AddContact,
    SearchContact,
    EditContact,
    DeleteContact,
    ViewContacts,
    Exit,
}

/// The four edit granularities, chosen from a submenu before any field is
/// collected.
pub enum EditCommand {
    Name,
    Number,
    Reference,
    All,
    Back,
}

// OUTPUT FUNCTIONS
pub fn parse_command_from_menu() -> Result<Command, AppError> {
    println!();
    println!("1. Add New Contact");
    println!("2. Search Contact");
    println!("3. Edit Contact");
    println!("4. Delete Contact");
    println!("5. View All Contacts");
    println!("6. Exit");
    print!("> ");
    io::stdout().flush()?;

    let action = get_input()?;

    match action.as_str() {
        "1" => Ok(Command::AddContact),
        "2" => Ok(Command::SearchContact),
        "3" => Ok(Command::EditContact),
        "4" => Ok(Command::DeleteContact),
        "5" => Ok(Command::ViewContacts),
        "6" => Ok(Command::Exit),
        _ => Err(AppError::ParseCommand(action)),
    }
}

pub fn parse_edit_command() -> Result<EditCommand, AppError> {
    println!();
    println!("1. Edit Contact Name");
    println!("2. Edit Contact Number");
    println!("3. Edit Reference Number");
    println!("4. Edit All");
    println!("* to go back");
    print!("> ");
    io::stdout().flush()?;

    let action = get_input()?;

    match action.as_str() {
        "1" => Ok(EditCommand::Name),
        "2" => Ok(EditCommand::Number),
        "3" => Ok(EditCommand::Reference),
        "4" => Ok(EditCommand::All),
        "*" => Ok(EditCommand::Back),
        _ => Err(AppError::ParseCommand(action)),
    }
}

/// Prompt for one field. Returns `None` when the user backs out with `*`.
pub fn prompt(label: &str) -> Result<Option<String>, AppError> {
    println!("\n{} \n* to go back: ", label);
    print!("> ");
    io::stdout().flush()?;

    let input = get_input()?;

    if input == "*" {
        return Ok(None);
    }
    Ok(Some(input))
}

pub fn confirm_exit() -> Result<bool, AppError> {
    println!("\nAre you sure you want to exit? (y/n)");
    print!("> ");
    io::stdout().flush()?;

    Ok(get_input()?.to_lowercase() == "y")
}

pub fn render_contact(contact: &Contact, json: bool) -> Result<String, AppError> {
    if json {
        Ok(serde_json::to_string(contact)?)
    } else {
        Ok(contact.to_string())
    }
}

pub fn render_contacts(contacts: &[&Contact], json: bool) -> Result<String, AppError> {
    if contacts.is_empty() {
        return Ok("No contacts available.".to_string());
    }

    let mut lines = Vec::with_capacity(contacts.len());
    for contact in contacts {
        lines.push(render_contact(contact, json)?);
    }
    Ok(lines.join("\n"))
}

// INPUT FUNCTIONS
pub fn get_input() -> Result<String, AppError> {
    let mut input = String::new();
    let read = io::stdin().read_line(&mut input)?;

    // A closed stdin must not spin the menu loop forever.
    if read == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "end of input",
        )));
    }
    Ok(input.trim().to_string())
}
