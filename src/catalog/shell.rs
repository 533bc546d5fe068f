use std::io::Write;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader, Stdin};
use tracing::warn;

use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::utils::term::clear_screen;

#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum MenuChoice {
    AddBook,
    SearchBooks,
    ListBooks,
    Exit,
    Unknown,
}

impl From<&str> for MenuChoice {
    fn from(s: &str) -> Self {
        match s {
            "1" => MenuChoice::AddBook,
            "2" => MenuChoice::SearchBooks,
            "3" => MenuChoice::ListBooks,
            "4" => MenuChoice::Exit,
            _ => MenuChoice::Unknown,
        }
    }
}

// Shell drives the catalog service through a line-based menu loop; it owns
// the single service instance for the whole process.
pub(crate) struct Shell {
    catalog_service: Arc<dyn CatalogService>,
    reader: BufReader<Stdin>,
}

impl Shell {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
            reader: BufReader::new(tokio::io::stdin()),
        }
    }

    pub(crate) async fn run(&mut self) {
        loop {
            clear_screen();
            println!();
            println!("{:^50}", "Book Catalog System");
            println!("1. Add a Book");
            println!("2. Search for a Book");
            println!("3. Display All Books");
            println!("4. Exit");

            let Some(choice) = self.prompt("Enter your choice: ").await else {
                break;
            };
            match MenuChoice::from(choice.as_str()) {
                MenuChoice::AddBook => {
                    if self.add_book().await.is_none() {
                        break;
                    }
                }
                MenuChoice::SearchBooks => {
                    if self.search_books().await.is_none() {
                        break;
                    }
                }
                MenuChoice::ListBooks => {
                    self.list_books().await;
                    if self.pause().await.is_none() {
                        break;
                    }
                }
                MenuChoice::Exit => {
                    println!("Exiting program.");
                    return;
                }
                MenuChoice::Unknown => {
                    println!("Invalid choice. Please try again.");
                    if self.pause().await.is_none() {
                        break;
                    }
                }
            }
        }
        // interrupt or closed stdin; completed mutations are already persisted
        println!("\nExiting program.");
    }

    async fn add_book(&mut self) -> Option<()> {
        let title = self.prompt("Enter book title: ").await?;
        let author = self.prompt("Enter book author: ").await?;
        let isbn = self.prompt("Enter book ISBN: ").await?;
        let category = self.prompt("Enter book category: ").await?;
        let sector = self.prompt("Enter book sector: ").await?;

        let req = AddBookCommandRequest::new(title.as_str(), author.as_str(),
                                             isbn.as_str(), category.as_str(), sector.as_str());
        match AddBookCommand::new(self.catalog_service.clone()).execute(req).await {
            Ok(res) => {
                println!("Book '{}' added successfully.", res.book.title);
            }
            Err(CommandError::Validation { .. }) => {
                println!("Invalid ISBN. Book not added.");
            }
            Err(err) => {
                println!("Failed to add book: {:?}", err);
            }
        }
        self.pause().await
    }

    async fn search_books(&mut self) -> Option<()> {
        let term = self.prompt("Enter a search term (title, author, ISBN, category, sector): ").await?;
        match SearchBooksCommand::new(self.catalog_service.clone())
            .execute(SearchBooksCommandRequest::new(term.as_str())).await {
            Ok(res) if res.total == 0 => {
                println!("\nNo results found.");
            }
            Ok(res) => {
                println!("\nSearch Results - Total Found: {}", res.total);
                for book in &res.books {
                    println!("{}", book);
                }
            }
            Err(err) => {
                println!("Failed to search books: {:?}", err);
            }
        }
        self.pause().await
    }

    async fn list_books(&mut self) {
        match ListBooksCommand::new(self.catalog_service.clone())
            .execute(ListBooksCommandRequest {}).await {
            Ok(res) => {
                println!("\nTotal number of books: {}", res.total);
                for book in &res.books {
                    println!("{}", book);
                }
            }
            Err(err) => {
                println!("Failed to list books: {:?}", err);
            }
        }
    }

    async fn pause(&mut self) -> Option<()> {
        self.prompt("\nPress Enter to continue...").await.map(|_| ())
    }

    // Reads one raw line; returns None when the user interrupts or stdin
    // closes, which the caller treats as an ordinary exit.
    async fn prompt(&mut self, label: &str) -> Option<String> {
        print!("{}", label);
        let _ = std::io::stdout().flush();
        let mut line = String::new();
        tokio::select! {
            res = self.reader.read_line(&mut line) => match res {
                Ok(0) => None,
                Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
                Err(err) => {
                    warn!("failed to read input: {}", err);
                    None
                }
            },
            _ = tokio::signal::ctrl_c() => None,
        }
    }
}
