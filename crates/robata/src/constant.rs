/// # Constants with reserved meanings in Robata

/// Index reserved for right-padding model input; the vocabulary never maps it to a word
pub const PAD_INDEX: u32 = 0;

/// Floor added to modeled probabilities before taking the log, so a zero-probability
/// token still produces a finite, orderable score
pub const PROB_FLOOR: f32 = 1e-9;

/// Number of hypotheses retained at each decoding step unless configured otherwise
pub const DEFAULT_BEAM_WIDTH: usize = 3;

/// Fixed model input width and upper bound on expansion steps unless configured otherwise
pub const DEFAULT_MAX_LENGTH: usize = 84;

/// Reserved vocabulary word marking the start of a caption sequence
pub const START_TOKEN: &str = "startseq";

/// Reserved vocabulary word marking the end of a caption sequence
pub const END_TOKEN: &str = "endseq";
