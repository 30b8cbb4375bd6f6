use cb_core::catalog::{OnboardingSlide, ONBOARDING_SLIDES};

/// Result of a carousel action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselStep {
    Moved(usize),
    Finished,
}

#[derive(Debug, Clone, Default)]
pub struct OnboardingCarousel {
    index: usize,
}

impl OnboardingCarousel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn slide(&self) -> &'static OnboardingSlide {
        &ONBOARDING_SLIDES[self.index]
    }

    pub fn slide_count(&self) -> usize {
        ONBOARDING_SLIDES.len()
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == ONBOARDING_SLIDES.len()
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    /// Skip is offered on every slide but the last.
    pub fn can_skip(&self) -> bool {
        !self.is_last()
    }

    pub fn primary_label(&self) -> &'static str {
        if self.is_last() {
            "Get Started"
        } else {
            "Next"
        }
    }

    pub fn next(&mut self) -> CarouselStep {
        if self.is_last() {
            return CarouselStep::Finished;
        }
        self.index += 1;
        CarouselStep::Moved(self.index)
    }

    pub fn back(&mut self) -> CarouselStep {
        self.index = self.index.saturating_sub(1);
        CarouselStep::Moved(self.index)
    }

    pub fn skip(&mut self) -> CarouselStep {
        CarouselStep::Finished
    }
}
