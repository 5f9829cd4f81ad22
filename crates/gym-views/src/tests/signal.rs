use crate::RefreshSignal;

use googletest::prelude::*;

#[test]
fn given_subscriber_when_notify_then_signal_is_received() {
    // Given
    let signal = RefreshSignal::new();
    let mut rx = signal.subscribe();

    // When
    signal.notify();

    // Then
    assert_that!(rx.try_recv().is_ok(), eq(true));
}

#[test]
fn given_no_notification_when_polled_then_receiver_is_empty() {
    let signal = RefreshSignal::new();
    let mut rx = signal.subscribe();

    assert_that!(rx.try_recv().is_err(), eq(true));
}

#[test]
fn given_two_subscribers_when_notify_then_both_receive() {
    let signal = RefreshSignal::new();
    let mut first = signal.subscribe();
    let mut second = signal.subscribe();

    signal.notify();

    assert_that!(first.try_recv().is_ok(), eq(true));
    assert_that!(second.try_recv().is_ok(), eq(true));
}

#[test]
fn given_cloned_signal_when_notify_then_original_subscriber_receives() {
    let signal = RefreshSignal::new();
    let mut rx = signal.subscribe();
    let clone = signal.clone();

    clone.notify();

    assert_that!(rx.try_recv().is_ok(), eq(true));
}
