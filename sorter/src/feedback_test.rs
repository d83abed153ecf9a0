use super::*;

#[test]
fn matched_feedback_text_and_color() {
    let fb = Feedback::matched(3);
    assert_eq!(fb.message, "🎉 Perfect match! 🎉");
    assert_eq!(fb.color, "#4ECDC4");
    assert_eq!(fb.generation, 3);
}

#[test]
fn mismatched_feedback_text_and_color() {
    let fb = Feedback::mismatched(9);
    assert_eq!(fb.message, "Try a different hole! 😊");
    assert_eq!(fb.color, "#FF6B6B");
    assert_eq!(fb.generation, 9);
}

#[test]
fn celebration_text_and_color() {
    let fb = Feedback::celebration(2);
    assert_eq!(fb.message, "🌟 All shapes sorted! Amazing! 🌟");
    assert_eq!(fb.color, "#4ECDC4");
    assert_eq!(fb.generation, 2);
}
