use filmstrip::config;
use filmstrip::image_navigation::Boundary;
use filmstrip::session::{
    DirectAccess, FsImageLoader, PathChooser, Selection, ViewerEvent, ViewerSession,
};
use std::io::BufRead;
use std::path::PathBuf;

/// Resolves the startup selection from the command line or the configured
/// start directory, standing in for a native picker dialog.
struct ArgPathChooser {
    candidate: Option<PathBuf>,
}

impl PathChooser for ArgPathChooser {
    fn choose(&mut self) -> Option<Selection> {
        let path = self.candidate.take()?;
        if path.is_dir() {
            Some(Selection::Directory(path))
        } else {
            Some(Selection::File(path))
        }
    }
}

fn main() {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();
    let path_arg = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    let config = config::load().unwrap_or_default();
    let candidate = path_arg.map(PathBuf::from).or(config.start_directory);

    let mut chooser = ArgPathChooser { candidate };
    let mut session = ViewerSession::new(FsImageLoader, DirectAccess);

    match session.open_from(&mut chooser) {
        Some(Ok(event)) => render(&event),
        Some(Err(err)) => {
            log::error!("{err}");
            eprintln!("{err}");
        }
        None => println!("Choose a folder or image file to begin."),
    }

    run_loop(&mut session);
}

fn run_loop(session: &mut ViewerSession<FsImageLoader, DirectAccess>) {
    let stdin = std::io::stdin();
    println!("Commands: n(ext), p(revious), l(ist), q(uit)");

    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        match line.trim() {
            "n" => render(&session.show_next()),
            "p" => render(&session.show_previous()),
            "l" => {
                for entry in session.navigator().entries() {
                    println!("{}", entry.display_name());
                }
            }
            "q" => break,
            "" => {}
            other => println!("Unknown command: {other}"),
        }
    }
}

fn render(event: &ViewerEvent) {
    match event {
        ViewerEvent::ImageSelected { entry, image } => match image {
            Ok(data) => println!("{} ({}x{})", entry.display_name(), data.width(), data.height()),
            Err(err) => println!("{}: {err}", entry.display_name()),
        },
        ViewerEvent::BoundaryHit(Boundary::First) => println!("Already at the first image."),
        ViewerEvent::BoundaryHit(Boundary::Last) => println!("Already at the last image."),
        ViewerEvent::NothingOpen => println!("No images here. Choose a folder or image file."),
    }
}
