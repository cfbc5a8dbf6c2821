use std::fmt;
use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;

/// Offer countdown. Purely cosmetic: reaching zero changes nothing else.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl Default for Countdown {
    fn default() -> Self {
        Countdown {
            hours: 23,
            minutes: 59,
            seconds: 59,
        }
    }
}

impl Countdown {
    pub fn tick(self) -> Self {
        if self.seconds > 0 {
            Countdown { seconds: self.seconds - 1, ..self }
        } else if self.minutes > 0 {
            Countdown { minutes: self.minutes - 1, seconds: 59, ..self }
        } else if self.hours > 0 {
            Countdown { hours: self.hours - 1, minutes: 59, seconds: 59 }
        } else {
            self
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

pub struct Tick;

impl Reducible for Countdown {
    type Action = Tick;

    fn reduce(self: Rc<Self>, _: Tick) -> Rc<Self> {
        Rc::new(self.tick())
    }
}

#[function_component(CountdownTimer)]
pub fn countdown_timer() -> Html {
    let countdown = use_reducer(Countdown::default);

    {
        let countdown = countdown.dispatcher();
        // yew_hooks clears the interval on unmount
        use_interval(move || countdown.dispatch(Tick), config::COUNTDOWN_TICK_MS);
    }

    html! {
        <div class="countdown-badge">
            <span class="countdown-icon">{"⏰"}</span>
            <span class="countdown-text">{format!("Oferta expira em: {}", *countdown)}</span>
        </div>
    }
}
