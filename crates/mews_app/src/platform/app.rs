use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::{bail, Context};
use mews_core::{update, AppState, Msg};
use mews_logging::{level_for_verbosity, mews_debug, mews_info, mews_warn};

use super::config::{CliArgs, Settings};
use super::effects::{AppEvent, EffectRunner};
use super::logging::{self, LogDestination};
use super::ui::input::{self, Command};
use super::ui::render;

pub fn run_app(args: CliArgs) -> anyhow::Result<()> {
    let settings = Settings::resolve(&args)?;
    logging::initialize(
        LogDestination::for_file(settings.log_file.as_deref()),
        level_for_verbosity(settings.verbose),
    );
    mews_debug!("Resolved settings: {:?}", settings);

    let (tx, rx) = mpsc::channel::<AppEvent>();
    let mut app = App {
        state: AppState::with_page_size(settings.page_size),
        runner: EffectRunner::new(&settings, tx.clone()).context("cannot start the load engine")?,
    };
    app.dispatch(Msg::RouteChanged(settings.start.clone()));

    if settings.once {
        drop(tx);
        return app.run_once(&rx);
    }

    spawn_stdin_reader(tx)?;
    app.show()?;
    app.run_interactive(&rx)
}

struct App {
    state: AppState,
    runner: EffectRunner,
}

impl App {
    fn dispatch(&mut self, msg: Msg) {
        if let Msg::RouteChanged(route) = &msg {
            self.runner.set_location(route.clone());
        }
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.run(effects);
    }

    fn run_once(mut self, rx: &mpsc::Receiver<AppEvent>) -> anyhow::Result<()> {
        while self.state.is_loading() {
            match rx.recv() {
                Ok(AppEvent::Engine(msg)) => self.dispatch(msg),
                Ok(_) => {}
                Err(_) => bail!("load engine stopped before the cats arrived"),
            }
        }
        self.show()?;
        if let Some(error) = self.state.view().error {
            bail!("could not load cats: {error}");
        }
        Ok(())
    }

    fn run_interactive(mut self, rx: &mpsc::Receiver<AppEvent>) -> anyhow::Result<()> {
        while let Ok(event) = rx.recv() {
            match event {
                AppEvent::Engine(msg) => self.dispatch(msg),
                AppEvent::Line(line) => match input::parse_command(&line, &self.state.view()) {
                    Command::Msg(msg) => self.dispatch(msg),
                    Command::Redraw => self.show()?,
                    Command::Help => println!("{}", input::HELP),
                    Command::Quit => break,
                    Command::Unknown(text) => {
                        mews_warn!("Unknown command {:?}", text);
                        println!("Unknown command {text:?}; type ? for help.");
                    }
                },
                AppEvent::InputClosed => break,
            }
            if self.state.consume_dirty() {
                self.show()?;
            }
        }
        mews_info!("Leaving at {}", self.runner.location());
        Ok(())
    }

    fn show(&self) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        render::render(&mut stdout, &self.state.view(), self.runner.location())?;
        stdout.flush()
    }
}

fn spawn_stdin_reader(tx: mpsc::Sender<AppEvent>) -> io::Result<()> {
    thread::Builder::new()
        .name("mews-stdin".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if tx.send(AppEvent::Line(line)).is_err() {
                            return;
                        }
                    }
                    Err(err) => {
                        mews_warn!("Cannot read stdin: {}", err);
                        break;
                    }
                }
            }
            let _ = tx.send(AppEvent::InputClosed);
        })?;
    Ok(())
}
