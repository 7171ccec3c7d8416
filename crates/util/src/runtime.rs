//! Process-wide logging and graceful-stop plumbing for long training runs.
use std::sync::OnceLock;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::time::Duration;
use std::time::Instant;

static STOP: AtomicBool = AtomicBool::new(false);
static DEADLINE: OnceLock<Instant> = OnceLock::new();

/// Info to the terminal, debug to `logs/{unix seconds}.log`.
pub fn log() -> std::io::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let path = format!("logs/{}.log", stamp);
    simplelog::CombinedLogger::init(vec![
        simplelog::TermLogger::new(
            log::LevelFilter::Info,
            config.clone(),
            simplelog::TerminalMode::Mixed,
            simplelog::ColorChoice::Auto,
        ),
        simplelog::WriteLogger::new(log::LevelFilter::Debug, config, std::fs::File::create(path)?),
    ])
    .map_err(std::io::Error::other)
}

/// Whether a stop was requested on stdin or the `TRAIN_DURATION` deadline passed.
/// Trainers poll this between iterations.
pub fn interrupted() -> bool {
    STOP.load(Ordering::Relaxed) || DEADLINE.get().is_some_and(|d| Instant::now() >= *d)
}

/// Arms both stop conditions: a `TRAIN_DURATION` such as `90s` or `2h`,
/// and a line reading `Q` on stdin.
pub fn brb() {
    match std::env::var("TRAIN_DURATION").ok().as_deref().map(parse_duration) {
        Some(Some(limit)) => {
            let _ = DEADLINE.set(Instant::now() + limit);
            log::info!("training for at most {:?}", limit);
        }
        Some(None) => log::warn!("ignoring unparseable TRAIN_DURATION"),
        None => {}
    }
    std::thread::spawn(|| {
        for line in std::io::stdin().lines() {
            match line {
                Ok(line) if line.trim().eq_ignore_ascii_case("q") => {
                    log::warn!("stopping after the current iteration");
                    STOP.store(true, Ordering::Relaxed);
                    return;
                }
                Ok(_) => continue,
                Err(_) => return,
            }
        }
    });
}

fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    let unit = s.chars().last()?;
    let value = s[..s.len() - unit.len_utf8()].parse::<u64>().ok()?;
    let scale = match unit {
        's' => 1,
        'm' => 60,
        'h' => 60 * 60,
        'd' => 24 * 60 * 60,
        _ => return None,
    };
    Some(Duration::from_secs(value * scale))
}
