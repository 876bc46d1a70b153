//! Seed records for the mock store.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde_json::json;
use ticketshub_types::{
    Connection, ConnectionStatus, Event, EventPartners, EventRequirements, EventStatus,
    Notification, NotificationKind, OrganizerProfile, PartnerType, Profile, SpeakerProfile,
    SponsorProfile, User, VendorProfile, VerificationStatus,
};

fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn clock(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

struct Account<'a> {
    id: &'a str,
    email: &'a str,
    password: &'a str,
    name: &'a str,
    phone: &'a str,
    status: VerificationStatus,
    created_at: DateTime<Utc>,
}

fn user(account: Account<'_>, profile: Profile) -> User {
    User {
        id: account.id.to_string(),
        email: account.email.to_string(),
        password: account.password.to_string(),
        name: account.name.to_string(),
        phone: account.phone.to_string(),
        status: account.status,
        avatar: None,
        created_at: account.created_at,
        last_login: None,
        profile,
    }
}

#[allow(clippy::too_many_lines)]
pub(super) fn users() -> Vec<User> {
    use VerificationStatus::{Pending, Rejected, Verified};

    vec![
        User {
            avatar: Some("https://avatars.ticketshub.example/admin.png".to_string()),
            last_login: Some(ts(2024, 3, 1, 9, 15)),
            ..user(
                Account {
                    id: "admin-1",
                    email: "admin@management.ticketshub.com",
                    password: "admin123",
                    name: "System Administrator",
                    phone: "+1 (555) 000-0001",
                    status: Verified,
                    created_at: ts(2023, 1, 1, 0, 0),
                },
                Profile::Admin,
            )
        },
        user(
            Account {
                id: "org-1",
                email: "organizer@management.ticketshub.com",
                password: "organizer123",
                name: "Sarah Johnson",
                phone: "+1 (555) 123-4567",
                status: Verified,
                created_at: ts(2023, 2, 14, 10, 30),
            },
            Profile::Organizer(OrganizerProfile {
                company_name: "EventPro Productions".to_string(),
                company_address: "123 Event Street, New York, NY 10001".to_string(),
                website: Some("https://eventpro.example".to_string()),
                description: "Full-service production company for conferences and galas."
                    .to_string(),
                events_organized: 45,
            }),
        ),
        user(
            Account {
                id: "org-2",
                email: "events@creativeminds.example",
                password: "organizer456",
                name: "Michael Chen",
                phone: "+1 (555) 234-5678",
                status: Pending,
                created_at: ts(2024, 2, 20, 16, 5),
            },
            Profile::Organizer(OrganizerProfile {
                company_name: "Creative Minds Events".to_string(),
                company_address: "48 Harbor Road, San Francisco, CA 94105".to_string(),
                website: None,
                description: "Boutique organizer of startup and community events.".to_string(),
                events_organized: 3,
            }),
        ),
        user(
            Account {
                id: "vnd-1",
                email: "vendor@management.ticketshub.com",
                password: "vendor123",
                name: "Emily Davis",
                phone: "+1 (555) 345-6789",
                status: Verified,
                created_at: ts(2023, 3, 8, 11, 0),
            },
            Profile::Vendor(VendorProfile {
                business_name: "Elite Catering Services".to_string(),
                category: "Catering".to_string(),
                services: strings(&["Corporate catering", "Buffet", "Beverage service"]),
                price_range: "$$$".to_string(),
                portfolio: strings(&["Tech Summit 2023", "City Marathon Expo"]),
                rating: 4.8,
            }),
        ),
        user(
            Account {
                id: "vnd-2",
                email: "av@soundwave.example",
                password: "vendor456",
                name: "James Wilson",
                phone: "+1 (555) 456-7890",
                status: Verified,
                created_at: ts(2023, 6, 19, 14, 45),
            },
            Profile::Vendor(VendorProfile {
                business_name: "SoundWave AV".to_string(),
                category: "Audio/Visual".to_string(),
                services: strings(&["Stage sound", "Lighting", "Live streaming"]),
                price_range: "$$".to_string(),
                portfolio: Vec::new(),
                rating: 4.5,
            }),
        ),
        user(
            Account {
                id: "vnd-3",
                email: "hello@bloomdecor.example",
                password: "vendor789",
                name: "Olivia Martinez",
                phone: "+1 (555) 567-8901",
                status: Pending,
                created_at: ts(2024, 2, 27, 8, 20),
            },
            Profile::Vendor(VendorProfile {
                business_name: "Bloom Decor".to_string(),
                category: "Decoration".to_string(),
                services: strings(&["Floral design", "Venue styling"]),
                price_range: "$$".to_string(),
                portfolio: Vec::new(),
                rating: 0.0,
            }),
        ),
        user(
            Account {
                id: "spk-1",
                email: "speaker@management.ticketshub.com",
                password: "speaker123",
                name: "Dr. Robert Smith",
                phone: "+1 (555) 678-9012",
                status: Verified,
                created_at: ts(2023, 4, 2, 9, 0),
            },
            Profile::Speaker(SpeakerProfile {
                expertise: strings(&["Artificial Intelligence", "Machine Learning"]),
                bio: "Researcher and keynote speaker on applied AI.".to_string(),
                experience_years: 15,
                speaking_fee: 5_000,
                topics: strings(&["Future of AI", "Responsible ML", "Cloud Computing"]),
                rating: 4.9,
            }),
        ),
        user(
            Account {
                id: "spk-2",
                email: "amara@keynote.example",
                password: "speaker456",
                name: "Amara Okafor",
                phone: "+1 (555) 789-0123",
                status: Rejected,
                created_at: ts(2024, 1, 11, 13, 30),
            },
            Profile::Speaker(SpeakerProfile {
                expertise: strings(&["Entrepreneurship"]),
                bio: "Founder and mentor.".to_string(),
                experience_years: 4,
                speaking_fee: 1_500,
                topics: strings(&["Fundraising 101"]),
                rating: 0.0,
            }),
        ),
        user(
            Account {
                id: "spn-1",
                email: "sponsor@management.ticketshub.com",
                password: "sponsor123",
                name: "Jennifer Brown",
                phone: "+1 (555) 890-1234",
                status: Verified,
                created_at: ts(2023, 5, 21, 15, 10),
            },
            Profile::Sponsor(SponsorProfile {
                company_name: "TechCorp Industries".to_string(),
                industry: "Technology".to_string(),
                sponsorship_budget: 100_000,
                sponsorship_types: strings(&["Title Sponsor", "Gold"]),
                target_audience: "Developers and IT decision makers".to_string(),
            }),
        ),
        user(
            Account {
                id: "spn-2",
                email: "partnerships@greenfuture.example",
                password: "sponsor456",
                name: "David Lee",
                phone: "+1 (555) 901-2345",
                status: Pending,
                created_at: ts(2024, 3, 3, 10, 0),
            },
            Profile::Sponsor(SponsorProfile {
                company_name: "GreenFuture Energy".to_string(),
                industry: "Energy".to_string(),
                sponsorship_budget: 40_000,
                sponsorship_types: strings(&["Silver"]),
                target_audience: "Sustainability-minded attendees".to_string(),
            }),
        ),
    ]
}

pub(super) fn events() -> Vec<Event> {
    vec![
        Event {
            id: "evt-1".to_string(),
            title: "Tech Innovation Summit 2024".to_string(),
            description: "Two days of talks and demos on AI, cloud and developer tooling."
                .to_string(),
            category: "Technology".to_string(),
            date: date(2024, 6, 15),
            time: clock(9, 0),
            venue: "Javits Center".to_string(),
            location: "New York, NY".to_string(),
            organizer_id: "org-1".to_string(),
            status: EventStatus::Published,
            budget: 250_000,
            expected_attendees: 2_000,
            requirements: EventRequirements {
                vendors: strings(&["Catering", "Audio/Visual"]),
                speakers: strings(&["Artificial Intelligence", "Cloud Computing"]),
                sponsors: strings(&["Title Sponsor", "Gold"]),
            },
            partners: EventPartners {
                vendors: strings(&["vnd-1"]),
                speakers: strings(&["spk-1"]),
                sponsors: Vec::new(),
            },
        },
        Event {
            id: "evt-2".to_string(),
            title: "Annual Charity Gala".to_string(),
            description: "Black-tie fundraising dinner with a live auction.".to_string(),
            category: "Charity".to_string(),
            date: date(2024, 9, 20),
            time: clock(19, 0),
            venue: "The Plaza Ballroom".to_string(),
            location: "New York, NY".to_string(),
            organizer_id: "org-1".to_string(),
            status: EventStatus::Approved,
            budget: 120_000,
            expected_attendees: 400,
            requirements: EventRequirements {
                vendors: strings(&["Catering", "Decoration", "Audio/Visual"]),
                speakers: Vec::new(),
                sponsors: strings(&["Gold", "Silver"]),
            },
            partners: EventPartners::default(),
        },
        Event {
            id: "evt-3".to_string(),
            title: "Startup Pitch Night".to_string(),
            description: "Ten founders, five minutes each, one investor panel.".to_string(),
            category: "Business".to_string(),
            date: date(2024, 7, 11),
            time: clock(18, 30),
            venue: "Pier 27 Hall".to_string(),
            location: "San Francisco, CA".to_string(),
            organizer_id: "org-2".to_string(),
            status: EventStatus::Pending,
            budget: 15_000,
            expected_attendees: 150,
            requirements: EventRequirements {
                vendors: strings(&["Catering"]),
                speakers: strings(&["Entrepreneurship", "Artificial Intelligence"]),
                sponsors: strings(&["Silver"]),
            },
            partners: EventPartners::default(),
        },
        Event {
            id: "evt-4".to_string(),
            title: "Music & Arts Festival".to_string(),
            description: "Outdoor weekend festival with local artists.".to_string(),
            category: "Entertainment".to_string(),
            date: date(2024, 8, 3),
            time: clock(12, 0),
            venue: "Riverside Park".to_string(),
            location: "Austin, TX".to_string(),
            organizer_id: "org-1".to_string(),
            status: EventStatus::Draft,
            budget: 80_000,
            expected_attendees: 5_000,
            requirements: EventRequirements {
                vendors: strings(&["Audio/Visual", "Decoration"]),
                speakers: Vec::new(),
                sponsors: strings(&["Title Sponsor"]),
            },
            partners: EventPartners::default(),
        },
        Event {
            id: "evt-5".to_string(),
            title: "Healthcare Leadership Forum".to_string(),
            description: "Executive forum on digital health.".to_string(),
            category: "Healthcare".to_string(),
            date: date(2023, 11, 8),
            time: clock(8, 30),
            venue: "McCormick Place".to_string(),
            location: "Chicago, IL".to_string(),
            organizer_id: "org-1".to_string(),
            status: EventStatus::Completed,
            budget: 60_000,
            expected_attendees: 300,
            requirements: EventRequirements {
                vendors: Vec::new(),
                speakers: strings(&["Machine Learning"]),
                sponsors: Vec::new(),
            },
            partners: EventPartners {
                vendors: Vec::new(),
                speakers: strings(&["spk-1"]),
                sponsors: Vec::new(),
            },
        },
    ]
}

pub(super) fn connections() -> Vec<Connection> {
    let link = |id: &str,
                event_id: &str,
                organizer_id: &str,
                partner_id: &str,
                partner_type: PartnerType,
                status: ConnectionStatus,
                message: &str,
                created_at: DateTime<Utc>| Connection {
        id: id.to_string(),
        event_id: event_id.to_string(),
        organizer_id: organizer_id.to_string(),
        partner_id: partner_id.to_string(),
        partner_type,
        status,
        message: message.to_string(),
        created_at,
    };

    vec![
        link(
            "con-1",
            "evt-1",
            "org-1",
            "vnd-1",
            PartnerType::Vendor,
            ConnectionStatus::Accepted,
            "We'd love Elite Catering for both summit days.",
            ts(2024, 2, 1, 10, 0),
        ),
        link(
            "con-2",
            "evt-1",
            "org-1",
            "spk-1",
            PartnerType::Speaker,
            ConnectionStatus::Accepted,
            "Would you give the opening keynote on the future of AI?",
            ts(2024, 2, 3, 9, 30),
        ),
        link(
            "con-3",
            "evt-1",
            "org-1",
            "spn-1",
            PartnerType::Sponsor,
            ConnectionStatus::Pending,
            "Title sponsorship package attached.",
            ts(2024, 2, 10, 14, 0),
        ),
        link(
            "con-4",
            "evt-2",
            "org-1",
            "vnd-2",
            PartnerType::Vendor,
            ConnectionStatus::Pending,
            "Looking for sound and lighting for the gala.",
            ts(2024, 2, 25, 11, 45),
        ),
        link(
            "con-5",
            "evt-2",
            "org-1",
            "vnd-1",
            PartnerType::Vendor,
            ConnectionStatus::Rejected,
            "Dinner service for 400 guests.",
            ts(2024, 2, 26, 16, 20),
        ),
        link(
            "con-6",
            "evt-5",
            "org-1",
            "spk-1",
            PartnerType::Speaker,
            ConnectionStatus::Completed,
            "Panel on machine learning in diagnostics.",
            ts(2023, 9, 14, 10, 0),
        ),
        link(
            "con-7",
            "evt-3",
            "org-2",
            "spk-1",
            PartnerType::Speaker,
            ConnectionStatus::Pending,
            "Could you judge the pitch finals?",
            ts(2024, 3, 2, 17, 0),
        ),
    ]
}

pub(super) fn notifications() -> Vec<Notification> {
    let note = |id: &str,
                user_id: &str,
                kind: NotificationKind,
                title: &str,
                message: &str,
                read: bool,
                data: Option<serde_json::Value>,
                created_at: DateTime<Utc>| Notification {
        id: id.to_string(),
        user_id: user_id.to_string(),
        kind,
        title: title.to_string(),
        message: message.to_string(),
        read,
        data,
        created_at,
    };

    vec![
        note(
            "ntf-1",
            "org-1",
            NotificationKind::ConnectionAccepted,
            "Vendor accepted",
            "Elite Catering Services accepted your request for Tech Innovation Summit 2024.",
            false,
            Some(json!({ "connection_id": "con-1", "event_id": "evt-1" })),
            ts(2024, 2, 2, 8, 0),
        ),
        note(
            "ntf-2",
            "org-1",
            NotificationKind::ConnectionAccepted,
            "Speaker confirmed",
            "Dr. Robert Smith will give the opening keynote.",
            true,
            Some(json!({ "connection_id": "con-2", "event_id": "evt-1" })),
            ts(2024, 2, 4, 12, 10),
        ),
        note(
            "ntf-3",
            "org-1",
            NotificationKind::EventApproved,
            "Event approved",
            "Annual Charity Gala was approved and can now receive partners.",
            false,
            Some(json!({ "event_id": "evt-2" })),
            ts(2024, 2, 22, 9, 0),
        ),
        note(
            "ntf-4",
            "org-1",
            NotificationKind::NewMessage,
            "New message",
            "TechCorp Industries asked about booth placement.",
            true,
            None,
            ts(2024, 2, 12, 15, 30),
        ),
        note(
            "ntf-5",
            "vnd-1",
            NotificationKind::ConnectionRequest,
            "New connection request",
            "EventPro Productions invited you to Tech Innovation Summit 2024.",
            true,
            Some(json!({ "connection_id": "con-1", "event_id": "evt-1" })),
            ts(2024, 2, 1, 10, 0),
        ),
        note(
            "ntf-6",
            "vnd-1",
            NotificationKind::NewMessage,
            "Menu tasting scheduled",
            "Sarah Johnson booked a menu tasting for next Tuesday.",
            false,
            None,
            ts(2024, 2, 28, 9, 45),
        ),
        note(
            "ntf-7",
            "vnd-2",
            NotificationKind::ConnectionRequest,
            "New connection request",
            "EventPro Productions invited you to Annual Charity Gala.",
            false,
            Some(json!({ "connection_id": "con-4", "event_id": "evt-2" })),
            ts(2024, 2, 25, 11, 45),
        ),
        note(
            "ntf-8",
            "spk-1",
            NotificationKind::ConnectionRequest,
            "New speaking invitation",
            "Creative Minds Events invited you to judge Startup Pitch Night.",
            false,
            Some(json!({ "connection_id": "con-7", "event_id": "evt-3" })),
            ts(2024, 3, 2, 17, 0),
        ),
        note(
            "ntf-9",
            "spn-1",
            NotificationKind::ConnectionRequest,
            "Sponsorship request",
            "EventPro Productions sent a title sponsorship package.",
            false,
            Some(json!({ "connection_id": "con-3", "event_id": "evt-1" })),
            ts(2024, 2, 10, 14, 0),
        ),
        note(
            "ntf-10",
            "admin-1",
            NotificationKind::NewMessage,
            "Verification queue",
            "3 accounts are waiting for verification.",
            false,
            None,
            ts(2024, 3, 3, 10, 5),
        ),
        note(
            "ntf-11",
            "spk-2",
            NotificationKind::VerificationRejected,
            "Verification rejected",
            "We could not verify your speaker profile. Please update your credentials.",
            false,
            None,
            ts(2024, 1, 15, 9, 0),
        ),
    ]
}
