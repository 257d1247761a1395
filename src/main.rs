use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use dialoguer::Select;
use infogame::content::Catalog;
use infogame::content::Confusion;
use infogame::content::Reliability;
use infogame::game::Confidence;
use infogame::game::Phase;
use infogame::game::Session;
use infogame::game::Signal;
use infogame::save::Logbook;
use std::path::PathBuf;

/// Clue-driven guessing game over information ecosystem actor typologies.
#[derive(Parser)]
#[command(name = "play", version, about)]
struct Args {
    /// Directory holding actors.json and classes.json.
    #[arg(long, default_value = "data")]
    data: PathBuf,
    /// Append-only CSV of round outcomes.
    #[arg(long, default_value = "logs/outcomes.csv")]
    log: PathBuf,
    /// Seed for deterministic rounds.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    infogame::log();
    let catalog = Catalog::load(&args.data)?;
    let sink = Box::new(Logbook::new(&args.log));
    let mut session = match args.seed {
        Some(seed) => Session::seeded(catalog, Confusion::default(), sink, seed),
        None => Session::new(catalog, Confusion::default(), sink),
    };
    loop {
        let keep_going = match session.phase() {
            Phase::Intro => intro(&mut session)?,
            Phase::Rules => rules(&mut session)?,
            Phase::Playing => play(&mut session)?,
        };
        if !keep_going {
            return Ok(());
        }
    }
}

/// Class-card carousel. Pure navigation, no game data.
fn intro(session: &mut Session) -> Result<bool> {
    let cards = session.catalog().cards().to_vec();
    let mut index = 0usize;
    loop {
        println!("\n{}", "Sınıfları Tanı 📚".bold());
        if cards.is_empty() {
            println!("{}", "Tanıtım kartları bulunamadı.".dimmed());
        } else {
            let card = &cards[index % cards.len()];
            println!(
                "\n{} {}  {}",
                card.class.emoji(),
                card.name.bold(),
                format!("({}/{})", index % cards.len() + 1, cards.len()).dimmed(),
            );
            println!("{}", card.summary);
            if !card.key_signals.is_empty() {
                println!("{}", "Ayırt Edici Sinyaller".bold());
                for signal in card.key_signals.iter() {
                    println!("  - {}", signal);
                }
            }
            if !card.example_clues.is_empty() {
                println!("{}", "Örnek İpuçları".bold());
                for example in card.example_clues.iter() {
                    println!("  - {}", example);
                }
            }
        }
        let choices = ["Sonraki ⟶", "⟵ Önceki", "🎮 Oyuna Başla", "📜 Kuralları Gör", "Çıkış"];
        match Select::new().items(&choices).default(0).interact()? {
            0 => index = index.wrapping_add(1),
            1 => index = index.wrapping_sub(1),
            2 => {
                session.deal();
                return Ok(true);
            }
            3 => {
                session.rules();
                return Ok(true);
            }
            _ => return Ok(false),
        }
    }
}

fn rules(session: &mut Session) -> Result<bool> {
    println!("\n{}", "Kurallar 📜".bold());
    println!("- Başta tek bir hedef aktör seçilir.");
    println!("- En fazla 5 ipucu açabilirsin (sıra: 1 High → 2 Medium → 2 Low).");
    println!("- Sınıfı seç, tahmin et.");
    println!("- Joker: bir kez yanlış sınıfı ele (−15).");
    println!("\n{}", "Skor".bold());
    println!("  Tur Puanı = 100 − 15 × (ek ipucu)");
    println!("  Erken Doğru Bonus = 10 × (kalan ipucu)");
    println!("  Yanlış: Tur Puanı − 20");
    println!("  Örnek: 2. ipucunda doğru → 115 puan.");
    let choices = ["🎮 Oyuna Başla", "⬅️ Tanıtıma Dön"];
    match Select::new().items(&choices).default(0).interact()? {
        0 => session.deal(),
        _ => session.intro(),
    }
    Ok(true)
}

fn chip(reliability: Reliability) -> colored::ColoredString {
    match reliability {
        Reliability::High => "High".green(),
        Reliability::Medium => "Medium".yellow(),
        Reliability::Low => "Low".red(),
    }
}

/// One round of play, then the settle screen.
fn play(session: &mut Session) -> Result<bool> {
    loop {
        let (revealed, cap, terminal, eliminated, options) = {
            let round = session.round().expect("playing phase has a round");
            println!(
                "\n{}  {}",
                format!("Skor: {} pts", session.score()).bold(),
                format!("İpucu {}/{}", round.revealed(), round.cap()).dimmed(),
            );
            for (i, clue) in round.visible().iter().enumerate() {
                println!("  İpucu {}: {} [{}]", i + 1, clue.text, chip(clue.reliability));
            }
            match round.selection() {
                Some(selection) => println!("Seçili sınıf: {}", selection.to_string().bold()),
                None => println!("{}", "Seçili sınıf: —".dimmed()),
            }
            (
                round.revealed(),
                round.cap(),
                round.terminal(),
                round.eliminated(),
                round.options().classes().to_vec(),
            )
        };

        if terminal {
            return settle(session);
        }

        let mut choices = Vec::new();
        if revealed < cap {
            choices.push("➕ Bir ipucu daha aç");
        }
        choices.push("Sınıf seç");
        if !eliminated && options.len() > 2 {
            choices.push("🗑️ Yanlış bir sınıfı ele (−15)");
        }
        choices.push("Güven seviyesi");
        choices.push("Etkileyen sinyali işaretle");
        choices.push("✅ Tahmin et");
        match choices[Select::new().items(&choices).default(0).interact()?] {
            "➕ Bir ipucu daha aç" => session.reveal(),
            "Sınıf seç" => {
                let labels = options
                    .iter()
                    .map(|c| format!("{} {}", c.emoji(), c.name()))
                    .collect::<Vec<String>>();
                let picked = Select::new().items(&labels).default(0).interact()?;
                session.select(options[picked]);
            }
            "🗑️ Yanlış bir sınıfı ele (−15)" => match session.eliminate() {
                Some(removed) => println!("Elendi: {}", removed),
                None => println!("{}", "Joker kullanılamıyor.".dimmed()),
            },
            "Güven seviyesi" => {
                let labels = Confidence::all()
                    .iter()
                    .map(|c| format!("{}%", c.percent()))
                    .collect::<Vec<String>>();
                let picked = Select::new().items(&labels).default(1).interact()?;
                session.confide(Confidence::all()[picked]);
            }
            "Etkileyen sinyali işaretle" => {
                let labels = Signal::all()
                    .iter()
                    .map(|s| s.to_string())
                    .collect::<Vec<String>>();
                let picked = Select::new().items(&labels).default(0).interact()?;
                session.tag(Some(Signal::all()[picked]));
            }
            _ => match session.submit() {
                Ok(outcome) if outcome.correct => {
                    println!("{} +{} puan", "Doğru! 🎉".green().bold(), outcome.points);
                }
                Ok(outcome) => {
                    println!(
                        "{} Doğru sınıf: {} · +{}",
                        "Yanlış.".red().bold(),
                        outcome.target_class.bold(),
                        outcome.points,
                    );
                }
                Err(_) => println!("{}", "Önce bir sınıf seç.".yellow()),
            },
        }
    }
}

/// Post-round screen: unopened clues, total score, replay menu.
fn settle(session: &mut Session) -> Result<bool> {
    let round = session.round().expect("playing phase has a round");
    if !round.hidden().is_empty() {
        println!("{}", "Açılmayan ipuçları:".dimmed());
        for (i, clue) in round.hidden().iter().enumerate() {
            let number = round.revealed() + i + 1;
            println!("  İpucu {}: {} [{}]", number, clue.text, chip(clue.reliability));
        }
    }
    println!("Toplam skor: {}", session.score().to_string().bold());
    let choices = ["🎮 Yeni tur", "Çıkış"];
    match Select::new().items(&choices).default(0).interact()? {
        0 => {
            session.deal();
            Ok(true)
        }
        _ => Ok(false),
    }
}
