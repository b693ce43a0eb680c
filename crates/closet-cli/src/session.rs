//! Interactive session: reads commands line by line and drives the closet.
//!
//! The session owns the closet, pending uploads and the saved outfits for
//! as long as it runs. Nothing is written to disk.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;

use closet_core::outfit::rules;
use closet_core::{
    collect_images, Category, ClosetError, ClosetStore, Config, ImageRef, IntakeQueue, Outfit,
    OutfitGenerator, OutfitRequest, OutfitResult, PendingImage, Result, SavedOutfits,
};

use crate::render;

const HELP: &str = "\
Commands:
  add <category> <image> [name...]   Add one item to the closet
  upload <path>...                   Queue image files or directories
  tag <category> [name...]           Categorize the current upload
  skip                               Skip the current upload
  clear                              Drop all pending uploads
  list [category]                    Show the closet
  outfit <occasion> <weather>        Suggest an outfit
  save                               Save the last suggested outfit
  saved [n]                          Show saved outfits, or saved outfit n
  rules                              Show the outfit rules
  help                               Show this help
  quit                               End the session

Quote arguments that contain spaces: add shirts \"My Closet/a.jpg\" Linen
";

/// What the loop should do after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue(String),
    Quit,
}

pub struct Session {
    config: Config,
    store: ClosetStore,
    queue: IntakeQueue,
    saved: SavedOutfits,
    last: Option<Outfit>,
    rng: StdRng,
}

impl Session {
    pub fn new(config: Config, store: ClosetStore, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            store,
            queue: IntakeQueue::default(),
            saved: SavedOutfits::new(),
            last: None,
            rng,
        }
    }

    pub fn store(&self) -> &ClosetStore {
        &self.store
    }

    pub fn saved(&self) -> &SavedOutfits {
        &self.saved
    }

    /// Run until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        write!(output, "{}", HELP)?;
        prompt(&mut output)?;

        for line in input.lines() {
            let line = line?;
            match self.execute(&line) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue(text)) => write!(output, "{}", text)?,
                Err(e) => writeln!(output, "{} {}", "[ERROR]".red().bold(), e)?,
            }
            prompt(&mut output)?;
        }

        writeln!(output)?;
        Ok(())
    }

    /// Execute one command line.
    ///
    /// Words are split shell-style, so quoted paths may contain spaces.
    pub fn execute(&mut self, line: &str) -> Result<Flow> {
        let Some(tokens) = shlex::split(line) else {
            return Ok(Flow::Continue(
                "Unbalanced quotes - close every \" or ' and try again.\n".to_string(),
            ));
        };
        let words: Vec<&str> = tokens.iter().map(String::as_str).collect();
        let Some((&command, args)) = words.split_first() else {
            return Ok(Flow::Continue(String::new()));
        };

        let text = match command.to_lowercase().as_str() {
            "add" => self.add(args)?,
            "upload" => self.upload(args)?,
            "tag" => self.tag(args)?,
            "skip" => {
                let image = self.queue.skip()?;
                format!("Skipped {}\n{}", image.path.display(), self.pending_status())
            }
            "clear" => {
                self.queue.clear();
                "Pending uploads cleared.\n".to_string()
            }
            "list" => self.list(args)?,
            "outfit" => self.outfit(args),
            "save" => self.save()?,
            "saved" => self.show_saved(args)?,
            "rules" => render::rules(&rules()),
            "help" => HELP.to_string(),
            "quit" | "exit" => return Ok(Flow::Quit),
            other => format!("Unknown command: {} (try 'help')\n", other),
        };

        Ok(Flow::Continue(text))
    }

    fn resolve_category(&self, raw: &str) -> Result<Category> {
        self.config
            .vocabulary()
            .resolve(raw)
            .ok_or_else(|| ClosetError::InvalidCategory {
                input: raw.to_string(),
            })
    }

    fn add(&mut self, args: &[&str]) -> Result<String> {
        let [category, image, name @ ..] = args else {
            return Ok("Usage: add <category> <image> [name...]\n".to_string());
        };

        let category = self.resolve_category(category)?;
        let name = if name.is_empty() {
            PendingImage::new(*image).default_name()
        } else {
            name.join(" ")
        };

        let entry = self.store.insert(category, name, ImageRef::new(*image));
        Ok(format!(
            "{} {} -> {}\n",
            "Added:".green(),
            entry.name,
            entry.category
        ))
    }

    fn upload(&mut self, args: &[&str]) -> Result<String> {
        if args.is_empty() {
            return Ok("Usage: upload <path>...\n".to_string());
        }

        let paths: Vec<PathBuf> = args.iter().map(PathBuf::from).collect();
        let images = collect_images(&paths, &self.config.intake.extensions)?;
        if images.is_empty() {
            return Ok("No image files found.\n".to_string());
        }

        let count = images.len();
        self.queue = IntakeQueue::new(images);
        Ok(format!(
            "{} {} image(s) queued.\n{}",
            "Upload:".green(),
            count,
            self.pending_status()
        ))
    }

    fn tag(&mut self, args: &[&str]) -> Result<String> {
        let Some((category, name)) = args.split_first() else {
            return Ok("Usage: tag <category> [name...]\n".to_string());
        };

        let category = self.resolve_category(category)?;
        let name = name.join(" ");
        let entry = self
            .queue
            .categorize(&mut self.store, category, Some(name.as_str()))?;

        Ok(format!(
            "{} {} -> {}\n{}",
            "Added:".green(),
            entry.name,
            entry.category,
            self.pending_status()
        ))
    }

    fn pending_status(&self) -> String {
        match self.queue.current() {
            Some(image) => format!(
                "Next: {} ({} left) - tag <category> [name...] or skip\n",
                image.path.display(),
                self.queue.remaining()
            ),
            None => "All items added to your closet!\n".to_string(),
        }
    }

    fn list(&self, args: &[&str]) -> Result<String> {
        if args.is_empty() {
            return Ok(render::closet(&self.store, None));
        }
        let category = self.resolve_category(&args.join(" "))?;
        Ok(render::closet(&self.store, Some(&category)))
    }

    fn outfit(&mut self, args: &[&str]) -> String {
        let [occasion, weather] = args else {
            return "Usage: outfit <occasion> <weather>\n".to_string();
        };

        let request = OutfitRequest::parse(occasion, weather);
        let result = OutfitGenerator::new(&self.store).generate_with(&request, &mut self.rng);
        let text = render::outfit_result(&result);

        self.last = match result {
            OutfitResult::Complete(outfit) => Some(outfit),
            _ => None,
        };
        if self.last.is_some() {
            format!("{}Type 'save' to keep this fit.\n", text)
        } else {
            text
        }
    }

    fn save(&mut self) -> Result<String> {
        let outfit = self.last.as_ref().ok_or(ClosetError::NothingToSave)?;
        let saved = self.saved.save(outfit);
        Ok(format!(
            "{} {} (#{})\n",
            "Saved:".green(),
            saved.headline(),
            self.saved.len()
        ))
    }

    fn show_saved(&self, args: &[&str]) -> Result<String> {
        match args {
            [] => Ok(render::saved_outfits(&self.saved)),
            [index] => match index.parse::<usize>() {
                Ok(index) => Ok(render::saved_outfit(index, self.saved.get(index)?)),
                Err(_) => Ok("Usage: saved [n]\n".to_string()),
            },
            _ => Ok("Usage: saved [n]\n".to_string()),
        }
    }
}

fn prompt<W: Write>(output: &mut W) -> Result<()> {
    write!(output, "closet> ")?;
    output.flush()?;
    Ok(())
}
