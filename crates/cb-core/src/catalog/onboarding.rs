#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnboardingSlide {
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
}

pub const ONBOARDING_SLIDES: [OnboardingSlide; 4] = [
    OnboardingSlide {
        title: "Fast Crypto Bill Payments",
        description: "Pay bills instantly with cryptocurrency. Experience seamless transactions.",
        image_url: "https://images.pexels.com/photos/8370752/pexels-photo-8370752.jpeg",
    },
    OnboardingSlide {
        title: "Instant Currency Conversion",
        description: "Convert crypto to fiat instantly at competitive rates.",
        image_url: "https://images.pexels.com/photos/8370836/pexels-photo-8370836.jpeg",
    },
    OnboardingSlide {
        title: "Pay Bills Seamlessly",
        description: "Handle all your utility bills, airtime, and subscriptions in one place.",
        image_url: "https://images.pexels.com/photos/8370754/pexels-photo-8370754.jpeg",
    },
    OnboardingSlide {
        title: "Digital Gift Cards",
        description: "Purchase gift cards from top brands using crypto.",
        image_url: "https://images.pexels.com/photos/8370772/pexels-photo-8370772.jpeg",
    },
];
