use std::env;
use std::process;
use std::sync::Arc;
use std::time::SystemTime;

use domain::auth::{landing_path, login};
use domain::ids::SequentialIds;
use domain::service::{ContentService, Scope};
use domain::slug::slugify;
use domain::store::SiteStore;
use domain::validate::validate_login_form;
use domain::{Clock, CoreError};

struct StdClock;
impl Clock for StdClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

const COLLECTIONS: &str =
    "branches, services, pricing, testimonials, blog, users, appointments";

fn print_usage() {
    eprintln!(
        "{}\n\nUsage:\n  domain login <email> <password>\n  domain list <collection>\n  domain slugify <title>\n\nCollections: {}\n\nNotes:\n  - This demo CLI runs against the seeded in-memory store; changes are not persisted.",
        domain::about(),
        COLLECTIONS
    );
}

fn rows(svc: &ContentService<SequentialIds, StdClock>, collection: &str) -> Result<Vec<String>, CoreError> {
    let rows = match collection {
        "branches" => svc
            .branches(Scope::All)?
            .into_iter()
            .map(|b| format!("{}\t{}\t{}", b.id, b.name, b.manager))
            .collect(),
        "services" => svc
            .services(Scope::All)?
            .into_iter()
            .map(|s| format!("{}\t{}\t{} TL / {} dk", s.id, s.name, s.price, s.duration))
            .collect(),
        "pricing" => svc
            .pricing_plans(Scope::All)?
            .into_iter()
            .map(|p| format!("{}\t{}\t{} TL / {}", p.id, p.name, p.price, p.period))
            .collect(),
        "testimonials" => svc
            .testimonials(Scope::All)?
            .into_iter()
            .map(|t| format!("{}\t{}\t{}/5", t.id, t.name, t.rating))
            .collect(),
        "blog" => svc
            .all_posts()?
            .into_iter()
            .map(|p| format!("{}\t{}\t{}", p.id, p.slug, p.published_at))
            .collect(),
        "users" => svc
            .users()?
            .into_iter()
            .map(|u| format!("{}\t{}\t{}", u.id, u.name, u.email))
            .collect(),
        "appointments" => svc
            .appointments()?
            .into_iter()
            .map(|a| format!("{}\t{} {}\t{}\t{:?}", a.id, a.date, a.time, a.user_name, a.status))
            .collect(),
        other => {
            return Err(CoreError::invalid(
                "collection",
                format!("unknown collection '{}'", other),
            ))
        }
    };
    Ok(rows)
}

fn run() -> Result<(), String> {
    let mut args = env::args().skip(1); // skip program name

    let Some(cmd) = args.next() else {
        print_usage();
        return Ok(());
    };

    let svc = ContentService::new(
        Arc::new(SiteStore::seeded()),
        SequentialIds::new("cli"),
        StdClock,
    );

    match cmd.as_str() {
        "login" => {
            let (Some(email), Some(password)) = (args.next(), args.next()) else {
                return Err("usage: domain login <email> <password>".into());
            };
            validate_login_form(&email, &password).map_err(|e| e.to_string())?;
            match login(&email, &password) {
                Some(user) => {
                    println!(
                        "logged in: {} <{}> as {} -> {}",
                        user.name,
                        user.email,
                        user.role.as_str(),
                        landing_path(user.role)
                    );
                    Ok(())
                }
                None => Err("invalid email or password".into()),
            }
        }
        "list" => {
            let Some(collection) = args.next() else {
                return Err("missing <collection> for list".into());
            };
            let lines = rows(&svc, &collection).map_err(|e| format!("list failed: {}", e))?;
            for line in lines {
                println!("{}", line);
            }
            Ok(())
        }
        "slugify" => {
            let title: Vec<String> = args.collect();
            if title.is_empty() {
                return Err("missing <title> for slugify".into());
            }
            println!("{}", slugify(&title.join(" ")));
            Ok(())
        }
        _ => {
            print_usage();
            Ok(())
        }
    }
}

fn main() {
    if let Err(msg) = run() {
        eprintln!("error: {}", msg);
        process::exit(1);
    }
}
