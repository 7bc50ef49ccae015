use crate::tests::user;
use crate::views::DeleteConfirmation;

#[test]
fn given_closed_prompt_when_confirmed_then_nothing_to_delete() {
    let mut prompt = DeleteConfirmation::default();

    assert!(!prompt.is_open());
    assert!(prompt.confirm().is_none());
}

#[test]
fn given_open_prompt_when_confirmed_then_returns_user_and_closes() {
    // Given
    let mut prompt = DeleteConfirmation::default();
    prompt.open(user(4, "Ana", "Lopez", "ana@x.com"));
    assert_eq!(prompt.pending().map(|u| u.id), Some(4));

    // When
    let confirmed = prompt.confirm();

    // Then
    assert_eq!(confirmed.map(|u| u.id), Some(4));
    assert_eq!(prompt, DeleteConfirmation::Closed);
}

#[test]
fn given_open_prompt_when_cancelled_then_closed() {
    let mut prompt = DeleteConfirmation::default();
    prompt.open(user(4, "Ana", "Lopez", "ana@x.com"));

    prompt.cancel();

    assert!(!prompt.is_open());
    assert!(prompt.pending().is_none());
}
