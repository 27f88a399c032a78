use super::DetectionNotifier;
use crate::contracts::resource_descriptor::ResourceDescriptor;
use tokio::sync::mpsc;

fn widget() -> ResourceDescriptor {
    ResourceDescriptor::new("example.com", "v1", "Widget")
}

#[tokio::test]
async fn test_publish_delivers_to_subscriber() {
    let (sender, mut receiver) = mpsc::channel(1);
    let notifier = DetectionNotifier::new(sender);

    assert!(notifier.publish(widget()));
    assert_eq!(receiver.recv().await, Some(widget()));
}

#[tokio::test]
async fn test_publish_on_full_channel_is_dropped() {
    let (sender, mut receiver) = mpsc::channel(1);
    let notifier = DetectionNotifier::new(sender);

    assert!(notifier.publish(widget()));
    assert!(!notifier.publish(ResourceDescriptor::new("example.com", "v1", "Gadget")));
    assert_eq!(receiver.recv().await, Some(widget()));
}

#[tokio::test]
async fn test_close_is_shared_by_clones() {
    // Arrange
    let (sender, mut receiver) = mpsc::channel(1);
    let notifier = DetectionNotifier::new(sender);
    let trigger_handle = notifier.clone();

    // Act
    notifier.close();

    // Assert
    assert!(trigger_handle.is_closed());
    assert!(!trigger_handle.publish(widget()));
    assert_eq!(receiver.recv().await, None);
}

#[tokio::test]
async fn test_publish_without_subscriber() {
    let (sender, receiver) = mpsc::channel(1);
    let notifier = DetectionNotifier::new(sender);
    drop(receiver);

    assert!(!notifier.publish(widget()));
    assert!(!notifier.is_closed());
}
