//! Map library: the content provider behind the windows.
//!
//! Windows only talk to [`MapLibrary`]. Every fallible call reports a
//! human-readable message, which ends up in the window's log region.

/// Owner of the save files when no map has claimed them.
pub const MAIN_GAME: &str = "Main Game";

/// Metadata of an installed or installable map.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MapRecord {
    pub name: String,
    pub author: Option<String>,
    pub version: Option<String>,
    pub startup_level: Option<String>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub is_wip: bool,
    pub issues: Vec<String>,
}

impl MapRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_startup_level(mut self, level: impl Into<String>) -> Self {
        self.startup_level = Some(level.into());
        self
    }

    pub fn with_descriptions(mut self, short: impl Into<String>, long: impl Into<String>) -> Self {
        self.short_description = Some(short.into());
        self.long_description = Some(long.into());
        self
    }

    pub fn with_issue(mut self, issue: impl Into<String>) -> Self {
        self.issues.push(issue.into());
        self
    }

    pub fn wip(mut self) -> Self {
        self.is_wip = true;
        self
    }

    /// A map is valid when nothing is wrong with it.
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupKind {
    Level,
    Script,
}

impl BackupKind {
    pub fn label(self) -> &'static str {
        match self {
            BackupKind::Level => "Level",
            BackupKind::Script => "Script",
        }
    }
}

/// A file set aside when an installation overwrote it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backup {
    pub name: String,
    pub kind: BackupKind,
    /// Map whose installation caused the backup.
    pub map: Option<String>,
}

impl Backup {
    pub fn new(name: impl Into<String>, kind: BackupKind) -> Self {
        Self {
            name: name.into(),
            kind,
            map: None,
        }
    }

    pub fn of_map(mut self, map: impl Into<String>) -> Self {
        self.map = Some(map.into());
        self
    }
}

/// Everything the windows need from map storage.
pub trait MapLibrary {
    /// Maps currently installed into the game.
    fn installed(&self) -> Vec<MapRecord>;

    /// Maps that can be installed.
    fn available(&self) -> Vec<MapRecord>;

    fn install(&mut self, name: &str) -> Result<(), String>;

    fn uninstall(&mut self, name: &str) -> Result<(), String>;

    /// Replace the installed map currently called `name`. The record may
    /// carry a new name.
    fn update(&mut self, name: &str, record: MapRecord) -> Result<(), String>;

    fn backups(&self) -> Vec<Backup>;

    /// Put a backed-up file back in place. The backup is consumed.
    fn restore_backup(&mut self, name: &str) -> Result<(), String>;

    /// Map the game's current save files belong to.
    fn current_save(&self) -> String;

    /// Maps with a backed-up set of save files.
    fn save_backups(&self) -> Vec<String>;

    /// Copy the current save files aside under their map's name, replacing
    /// an older backup of the same map. Returns that name.
    fn back_up_current_save(&mut self) -> Result<String, String>;

    /// Back up the current save, then load the backup of `name` in its place.
    /// The loaded backup is kept.
    fn swap_save(&mut self, name: &str) -> Result<(), String>;

    /// Whether saves are backed up and loaded automatically around a map.
    fn auto_backups(&self) -> bool;

    fn set_auto_backups(&mut self, enabled: bool) -> Result<(), String>;

    fn is_installed(&self, name: &str) -> bool {
        self.installed().iter().any(|map| map.name == name)
    }
}

/// Library kept entirely in memory.
#[derive(Debug, Clone)]
pub struct MemoryLibrary {
    installed: Vec<MapRecord>,
    available: Vec<MapRecord>,
    backups: Vec<Backup>,
    /// `None` while the saves belong to the main game.
    current_save: Option<String>,
    save_backups: Vec<String>,
    auto_backups: bool,
}

impl Default for MemoryLibrary {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new())
    }
}

impl MemoryLibrary {
    pub fn new(installed: Vec<MapRecord>, available: Vec<MapRecord>, backups: Vec<Backup>) -> Self {
        Self {
            installed,
            available,
            backups,
            current_save: None,
            save_backups: Vec::new(),
            auto_backups: true,
        }
    }

    /// Seed the save files: who owns the current save, and which maps have
    /// a backup.
    pub fn with_saves(mut self, current: Option<&str>, backups: &[&str]) -> Self {
        self.current_save = current.map(str::to_string);
        self.save_backups = backups.iter().map(|name| name.to_string()).collect();
        self
    }

    /// A small library to explore the console with.
    pub fn demo() -> Self {
        let sewers = MapRecord::new("Sewer Crawl")
            .with_author("Ninth Tentacle")
            .with_version("1.2")
            .with_startup_level("sewers_01")
            .with_descriptions(
                "Squeeze through the city's drains.",
                "A linear descent through flooded tunnels. Three new containment units and \
                 a rewritten ending. Best played after finishing the main game.",
            );
        let lab = MapRecord::new("Relith Annex")
            .with_author("biomass")
            .with_version("0.4")
            .with_descriptions("An unfinished research wing.", "")
            .wip()
            .with_issue("Startup Level \"annex_00\" is invalid!")
            .with_issue("Map doesn't contain \"Scripts\" folder!");
        let harbor = MapRecord::new("Harbor Outbreak")
            .with_author("Deepwater")
            .with_version("2.0")
            .with_startup_level("harbor_intro")
            .with_descriptions(
                "Escape a quarantined port.",
                "Break out of a container ship and take over the harbor, one crane at a time.",
            );
        let tower = MapRecord::new("Tower Nine").with_author("spire").with_issue(
            "Map doesn't contain \"Levels\" folder!",
        );

        Self::new(
            vec![sewers.clone()],
            vec![sewers, lab, harbor, tower],
            vec![
                Backup::new("harbor_intro.json", BackupKind::Level).of_map("Harbor Outbreak"),
                Backup::new("harbor_intro.lua", BackupKind::Script).of_map("Harbor Outbreak"),
                Backup::new("sewers_02.json", BackupKind::Level),
            ],
        )
        .with_saves(Some("Sewer Crawl"), &[MAIN_GAME, "Harbor Outbreak"])
    }
}

impl MapLibrary for MemoryLibrary {
    fn installed(&self) -> Vec<MapRecord> {
        self.installed.clone()
    }

    fn available(&self) -> Vec<MapRecord> {
        self.available.clone()
    }

    fn install(&mut self, name: &str) -> Result<(), String> {
        if self.is_installed(name) {
            return Err(format!("Map {} is already installed!", name));
        }
        let record = self
            .available
            .iter()
            .find(|map| map.name == name)
            .cloned()
            .ok_or_else(|| format!("Map {} is not available", name))?;
        log::info!("installing map {}", name);
        self.installed.push(record);
        Ok(())
    }

    fn uninstall(&mut self, name: &str) -> Result<(), String> {
        let index = self
            .installed
            .iter()
            .position(|map| map.name == name)
            .ok_or_else(|| format!("Map {} is not installed", name))?;
        log::info!("uninstalling map {}", name);
        self.installed.remove(index);
        Ok(())
    }

    fn update(&mut self, name: &str, record: MapRecord) -> Result<(), String> {
        if record.name.is_empty() {
            return Err("Map name cannot be empty".to_string());
        }
        if record.name != name && self.is_installed(&record.name) {
            return Err(format!("A map named {} is already installed", record.name));
        }
        let slot = self
            .installed
            .iter_mut()
            .find(|map| map.name == name)
            .ok_or_else(|| format!("Map {} is not installed", name))?;
        *slot = record;
        Ok(())
    }

    fn backups(&self) -> Vec<Backup> {
        self.backups.clone()
    }

    fn restore_backup(&mut self, name: &str) -> Result<(), String> {
        let index = self
            .backups
            .iter()
            .position(|backup| backup.name == name)
            .ok_or_else(|| format!("No backup named {}", name))?;
        let backup = self.backups.remove(index);
        log::info!("restored {} backup {}", backup.kind.label(), backup.name);
        Ok(())
    }

    fn current_save(&self) -> String {
        self.current_save.clone().unwrap_or_else(|| MAIN_GAME.to_string())
    }

    fn save_backups(&self) -> Vec<String> {
        self.save_backups.clone()
    }

    fn back_up_current_save(&mut self) -> Result<String, String> {
        let name = self.current_save();
        if !self.save_backups.contains(&name) {
            self.save_backups.push(name.clone());
        }
        log::info!("backed up save of {}", name);
        Ok(name)
    }

    fn swap_save(&mut self, name: &str) -> Result<(), String> {
        if !self.save_backups.iter().any(|backup| backup == name) {
            return Err(format!("No save backup of {}", name));
        }
        self.back_up_current_save()?;
        self.current_save = (name != MAIN_GAME).then(|| name.to_string());
        log::info!("loaded save backup of {}", name);
        Ok(())
    }

    fn auto_backups(&self) -> bool {
        self.auto_backups
    }

    fn set_auto_backups(&mut self, enabled: bool) -> Result<(), String> {
        self.auto_backups = enabled;
        Ok(())
    }
}
