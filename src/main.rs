#[macro_use]
extern crate rust_i18n;

mod api;
mod config;
mod models;
mod pages;
mod route;
mod router;
mod screen;
mod tui;
mod view;

use clap::{Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

use crate::api::CatalogClient;
use crate::config::ConfigManager;
use crate::route::Route;
use crate::tui::app::{App, Focus};
use crate::tui::events::TuiEvent;

i18n!("locales", fallback = "en");

#[derive(Parser)]
#[command(name = "oplo")]
#[command(about = "Terminal client for the Oploverz anime catalog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one page to stdout and exit.
    Show {
        /// Route fragment, e.g. `home`, `detail/one-piece` or `search/naruto`.
        fragment: String,
    },
    Tui,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config_manager = ConfigManager::new()?;
    rust_i18n::set_locale(&config_manager.config.general.locale);
    let client = CatalogClient::new(config_manager.config.catalog.base_url.clone());

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui);

    match command {
        Commands::Show { fragment } => {
            let route = Route::parse(&fragment)?;
            let content = pages::load(&client, &route).await;
            for line in &content.lines {
                println!("{}", line);
            }
            for row in &content.rows {
                println!("  {}", row.text);
            }
        }
        Commands::Tui => {
            run_tui(client).await?;
        }
    }

    Ok(())
}

async fn run_tui(client: CatalogClient) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(client);
    app.start();

    loop {
        terminal.draw(|f| tui::ui::draw(f, &mut app))?;

        match tui::events::handle_input()? {
            TuiEvent::Tick => {
                app.on_tick();
            }
            TuiEvent::Quit => {
                app.running = false;
            }
            TuiEvent::Key(code) => {
                use crossterm::event::KeyCode;

                if code == KeyCode::Char('/') {
                    app.focus = match app.focus {
                        Focus::List => Focus::SearchBar,
                        Focus::SearchBar => Focus::List,
                    };
                    continue;
                }

                match app.focus.clone() {
                    Focus::SearchBar => match code {
                        KeyCode::Char(c) => app.search_query.push(c),
                        KeyCode::Backspace => {
                            app.search_query.pop();
                        }
                        KeyCode::Enter => app.commit_search(),
                        KeyCode::Esc => app.focus = Focus::List,
                        _ => {}
                    },
                    Focus::List => match code {
                        KeyCode::Char('q') => app.running = false,
                        KeyCode::Char('j') | KeyCode::Down => app.next(),
                        KeyCode::Char('k') | KeyCode::Up => app.previous(),
                        KeyCode::Char('J') | KeyCode::PageDown => app.jump_forward(10),
                        KeyCode::Char('K') | KeyCode::PageUp => app.jump_backward(10),
                        KeyCode::Enter => app.activate_selected(),
                        KeyCode::Char('h') => app.navigate(Route::Home),
                        KeyCode::Char('o') => app.navigate(Route::Ongoing),
                        KeyCode::Char('c') => app.navigate(Route::Completed),
                        KeyCode::Char('s') => app.navigate(Route::Schedule),
                        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('[') => app.go_back(),
                        KeyCode::Char(']') => app.go_forward(),
                        _ => {}
                    },
                }
            }
        }

        if !app.running {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
