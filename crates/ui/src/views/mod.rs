mod progress;
mod tutor;

pub use progress::ProgressView;
pub use tutor::MathTutorView;

#[cfg(test)]
pub(crate) use tutor::TutorTestHandles;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
