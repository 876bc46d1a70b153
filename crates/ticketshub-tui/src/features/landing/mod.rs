//! Public landing page: hero, features, role cards and testimonials.

mod render;

pub use render::render_landing;

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub company: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "We staffed a 2,000-person summit in two weeks. Every vendor came verified.",
        author: "Sarah Johnson",
        company: "EventPro Productions",
    },
    Testimonial {
        quote: "Half of my bookings this year came from organizers who found me here.",
        author: "Emily Davis",
        company: "Elite Catering Services",
    },
    Testimonial {
        quote: "I only see invitations that match my topics. No more noise.",
        author: "Dr. Robert Smith",
        company: "Keynote speaker",
    },
    Testimonial {
        quote: "Our sponsorship budget finally reaches the audiences we care about.",
        author: "Jennifer Brown",
        company: "TechCorp Industries",
    },
];

pub const FEATURES: &[(&str, &str)] = &[
    (
        "Verified partners",
        "Every vendor, speaker and sponsor is reviewed before they can connect.",
    ),
    (
        "Smart matching",
        "Event requirements are matched against partner categories and topics.",
    ),
    (
        "Connection requests",
        "Invite partners, track replies and keep the conversation in one place.",
    ),
    (
        "Live notifications",
        "Approvals, requests and messages arrive the moment they happen.",
    ),
    (
        "Role dashboards",
        "Organizers, partners and admins each get the view they need.",
    ),
    (
        "Event lifecycle",
        "Move events from draft to published with admin approval built in.",
    ),
];

/// Testimonial carousel position.
#[derive(Debug, Default, Clone)]
pub struct LandingState {
    pub testimonial: usize,
    ticks_on_slide: u64,
}

impl LandingState {
    /// Advances the carousel once `period_ticks` ticks have passed on a slide.
    pub fn on_tick(&mut self, period_ticks: u64) {
        self.ticks_on_slide += 1;
        if self.ticks_on_slide >= period_ticks.max(1) {
            self.ticks_on_slide = 0;
            self.testimonial = (self.testimonial + 1) % TESTIMONIALS.len();
        }
    }

    pub fn current(&self) -> &'static Testimonial {
        &TESTIMONIALS[self.testimonial % TESTIMONIALS.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carousel_advances_and_wraps() {
        let mut state = LandingState::default();
        for _ in 0..3 {
            state.on_tick(3);
        }
        assert_eq!(state.testimonial, 1);

        for _ in 0..(3 * TESTIMONIALS.len()) {
            state.on_tick(3);
        }
        assert_eq!(state.testimonial, 1);
    }
}
