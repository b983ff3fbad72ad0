use chrono::{Duration, NaiveDate};

use super::requests::CreateEventRequest;

/// Returns a complete create request with placeholder content for the given title.
pub fn sample_event_request(title: &str) -> CreateEventRequest {
    CreateEventRequest {
        title: title.to_string(),
        description: format!("{title} brings developers together for a day of talks."),
        overview: format!("An overview of {title}."),
        image: "/images/event1.png".to_string(),
        venue: "Moscone Center".to_string(),
        location: "San Francisco, CA, USA".to_string(),
        date: "2025-11-15".to_string(),
        time: "9:00".to_string(),
        mode: "offline".to_string(),
        audience: "Developers".to_string(),
        agenda: vec![
            "Registration and coffee".to_string(),
            "Keynote".to_string(),
            "Networking".to_string(),
        ],
        organizer: "DevEvent Community".to_string(),
        tags: vec!["community".to_string(), "networking".to_string()],
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// Generates demo events scheduled relative to `today`.
///
/// Dates and times are deliberately given in mixed raw formats so seeding
/// exercises the same normalization as user submissions.
pub fn generate_seed_events(today: NaiveDate) -> Vec<CreateEventRequest> {
    let iso = |days: i64| (today + Duration::days(days)).format("%Y-%m-%d").to_string();
    let long = |days: i64| (today + Duration::days(days)).format("%B %-d, %Y").to_string();

    vec![
        CreateEventRequest {
            title: "React Summit US 2025".to_string(),
            description: "The biggest React conference in the US.".to_string(),
            overview: "Two days of React talks, workshops and networking.".to_string(),
            image: "/images/event1.png".to_string(),
            venue: "Liberty Science Center".to_string(),
            location: "Jersey City, NJ, USA".to_string(),
            date: iso(14),
            time: "9:00".to_string(),
            mode: "hybrid".to_string(),
            audience: "Frontend developers".to_string(),
            agenda: strings(&["Opening keynote", "React Server Components", "Panel"]),
            organizer: "GitNation".to_string(),
            tags: strings(&["react", "javascript", "frontend"]),
        },
        CreateEventRequest {
            title: "RustConf".to_string(),
            description: "The official annual Rust conference.".to_string(),
            overview: "Talks on the language, tooling and ecosystem.".to_string(),
            image: "/images/event2.png".to_string(),
            venue: "Hyatt Regency".to_string(),
            location: "Seattle, WA, USA".to_string(),
            date: format!("{}T16:00:00Z", iso(30)),
            time: "10:30".to_string(),
            mode: "offline".to_string(),
            audience: "Rust developers".to_string(),
            agenda: strings(&["Keynote", "Async Rust in production", "Lightning talks"]),
            organizer: "Rust Foundation".to_string(),
            tags: strings(&["rust", "systems"]),
        },
        CreateEventRequest {
            title: "WebAssembly & Rust Meetup".to_string(),
            description: "A monthly meetup about Rust on the web.".to_string(),
            overview: "Short talks followed by pizza.".to_string(),
            image: "/images/event3.png".to_string(),
            venue: "Online".to_string(),
            location: "Remote".to_string(),
            date: long(7),
            time: "18:00".to_string(),
            mode: "online".to_string(),
            audience: "Everyone".to_string(),
            agenda: strings(&["Intro", "Talks", "Q&A"]),
            organizer: "Rust Users Group".to_string(),
            tags: strings(&["rust", "wasm"]),
        },
        CreateEventRequest {
            title: "Next.js Conf".to_string(),
            description: "The Next.js community conference.".to_string(),
            overview: "Product announcements and framework deep dives.".to_string(),
            image: "/images/event4.png".to_string(),
            venue: "The Midway".to_string(),
            location: "San Francisco, CA, USA".to_string(),
            date: iso(45),
            time: "8:30".to_string(),
            mode: "hybrid".to_string(),
            audience: "Web developers".to_string(),
            agenda: strings(&["Keynote", "Workshops"]),
            organizer: "Vercel".to_string(),
            tags: strings(&["nextjs", "react", "javascript"]),
        },
    ]
}
