mod actions;
mod components;
mod view;

#[cfg(test)]
mod intent_smoke;

pub use view::QuizView;
