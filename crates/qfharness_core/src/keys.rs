//! Well-known keys of the result document (`qf.json`).

/// Default location of the result document, relative to the working directory.
pub const DEFAULT_RESULT_FILE: &str = "qf.json";

/// Fixed harness: `Power(2, 4) == 16`.
pub const POWER_CORRECT: &str = "powerCorrect";

/// Fixed harness: `Power(1.5, 3) == 3.375`.
pub const POWER_NON_INTEGER_CORRECT: &str = "powerNonIntegerCorrect";

/// Fixed harness: `Power(50, 0) == 1`.
pub const POWER_ZERO: &str = "powerZero";

/// Template harness: number of assertions that evaluated to true.
pub const SUCCESSFUL_TEST_COUNT: &str = "successfulTestCount";

/// Template harness: number of assertions that evaluated to false.
pub const FAILED_TEST_COUNT: &str = "failedTestCount";

/// Array of markdown feedback lines.
pub const FEEDBACK: &str = "feedback";

/// Array of test descriptors consumed by the generation step.
pub const TESTS: &str = "tests";

/// Custom imports (array of strings, or one newline-separated string).
pub const IMPORTS: &str = "imports";

/// The raw candidate solution.
pub const ANSWER: &str = "answer";

/// The candidate solution after answer embedding.
pub const EMBEDDED_ANSWER: &str = "embeddedAnswer";

/// Embedding template rendered against the document to produce [`EMBEDDED_ANSWER`].
pub const ANSWER_EMBEDDING: &str = "answerEmbedding";

/// Default embedding: the answer itself.
pub const DEFAULT_ANSWER_EMBEDDING: &str = "{{answer}}";

/// Keys written by the fixed harness, in evaluation order.
pub const FIXED_KEYS: &[&str] = &[POWER_CORRECT, POWER_NON_INTEGER_CORRECT, POWER_ZERO];

/// Keys written by the template harness.
pub const COUNT_KEYS: &[&str] = &[SUCCESSFUL_TEST_COUNT, FAILED_TEST_COUNT];
