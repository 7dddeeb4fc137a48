use arithmetic_flashcards::{App, Config, logger, ui};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

#[tokio::main]
async fn main() -> io::Result<()> {
    let config = Config::from_env();
    logger::init(&config.log_path);
    logger::log(&format!("Starting with {:?}", config));

    // The quiz only becomes interactive once the problems are loaded.
    let mut app = App::new(&config);
    app.load_problem_sets(&config.problems_path).await;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Some(error) = app.load_error() {
        eprintln!("Error: could not load the problems: {}", error);
    }

    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    let mut events = EventStream::new();
    let mut rng = rand::thread_rng();

    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;

        match events.next().await {
            Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                app.handle_key(key, &mut rng);
            }
            Some(Ok(_)) => {}
            Some(Err(e)) => return Err(e),
            None => break,
        }
    }

    logger::log("Exiting");
    Ok(())
}
