use std::io::ErrorKind;
use std::process::exit;

use clap::Parser;

use contact_book::cli::{self, Cli, Command, EditCommand};
use contact_book::domain::ContactBook;
use contact_book::errors::AppError;

fn main() {
    let cli = Cli::parse();
    let mut book = ContactBook::new();

    println!("\n--- Contact Book ---");

    if let Err(e) = run_session(&cli, &mut book) {
        eprintln!("{}", e);
        exit(1);
    }
}

fn run_session(cli: &Cli, book: &mut ContactBook) -> Result<(), AppError> {
    'menu: loop {
        let command = match cli::parse_command_from_menu() {
            Ok(command) => command,
            Err(AppError::Io(e)) if e.kind() == ErrorKind::UnexpectedEof => return Ok(()),
            Err(e) => {
                eprintln!("{}", e);
                continue 'menu;
            }
        };

        let result = match command {
            Command::AddContact => add_contact(cli, book),
            Command::SearchContact => search_contact(cli, book),
            Command::EditContact => edit_contact(cli, book),
            Command::DeleteContact => delete_contact(cli, book),
            Command::ViewContacts => view_contacts(cli, book),
            Command::Exit => match cli::confirm_exit() {
                Ok(true) => {
                    println!("\nBye!");
                    return Ok(());
                }
                Ok(false) => Ok(()),
                Err(e) => Err(e),
            },
        };

        match result {
            Ok(()) => {}
            Err(AppError::Io(e)) if e.kind() == ErrorKind::UnexpectedEof => return Ok(()),
            // No-change is a notice, not a failure.
            Err(e @ AppError::NoChange) => println!("{}", e),
            Err(e) => eprintln!("{}", e),
        }
    }
}

fn add_contact(cli: &Cli, book: &mut ContactBook) -> Result<(), AppError> {
    let Some(reference) = cli::prompt("Enter reference number")? else {
        return Ok(());
    };
    let Some(name) = cli::prompt("Enter contact name")? else {
        return Ok(());
    };
    let Some(number) = cli::prompt("Enter phone number")? else {
        return Ok(());
    };

    book.add(&reference, &name, &number)?;

    println!("Contact added successfully.");
    view_contacts(cli, book)
}

fn search_contact(cli: &Cli, book: &ContactBook) -> Result<(), AppError> {
    let Some(reference) = cli::prompt("Enter reference number")? else {
        return Ok(());
    };

    let contact = book.find(&reference)?;
    println!("{}", cli::render_contact(contact, cli.json)?);
    Ok(())
}

fn delete_contact(cli: &Cli, book: &mut ContactBook) -> Result<(), AppError> {
    let Some(reference) = cli::prompt("Enter reference number")? else {
        return Ok(());
    };

    book.delete(&reference)?;

    println!("Contact deleted successfully.");
    view_contacts(cli, book)
}

fn view_contacts(cli: &Cli, book: &ContactBook) -> Result<(), AppError> {
    println!("{}", cli::render_contacts(&book.list_all(), cli.json)?);
    Ok(())
}

fn edit_contact(cli: &Cli, book: &mut ContactBook) -> Result<(), AppError> {
    let edit = cli::parse_edit_command()?;

    let updated = match edit {
        EditCommand::Back => return Ok(()),
        EditCommand::Name => {
            let Some(reference) = cli::prompt("Enter reference number")? else {
                return Ok(());
            };
            let Some(name) = cli::prompt("Enter new contact name")? else {
                return Ok(());
            };
            book.update_name(&reference, &name)
        }
        EditCommand::Number => {
            let Some(reference) = cli::prompt("Enter reference number")? else {
                return Ok(());
            };
            let Some(number) = cli::prompt("Enter new phone number")? else {
                return Ok(());
            };
            book.update_number(&reference, &number)
        }
        EditCommand::Reference => {
            let Some(reference) = cli::prompt("Enter current reference number")? else {
                return Ok(());
            };
            let Some(new_reference) = cli::prompt("Enter new reference number")? else {
                return Ok(());
            };
            book.update_reference(&reference, &new_reference)
        }
        EditCommand::All => {
            let Some(reference) = cli::prompt("Enter reference number")? else {
                return Ok(());
            };
            let Some(new_reference) = cli::prompt("Enter new reference number")? else {
                return Ok(());
            };
            let Some(name) = cli::prompt("Enter new contact name")? else {
                return Ok(());
            };
            let Some(number) = cli::prompt("Enter new phone number")? else {
                return Ok(());
            };
            book.update_all(&reference, &new_reference, &name, &number)
        }
    };

    updated?;

    println!("Contact updated successfully.");
    view_contacts(cli, book)
}
