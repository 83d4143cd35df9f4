/// Tono de la notificación; la capa de presentación decide ícono y color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
  Info,
  Success,
  Warning,
}

/// Port de notificaciones al usuario. Fire-and-forget: a nadie le
/// devolvemos error por no poder avisar.
pub trait Notifier {
  fn notify(&self, kind: NoticeKind, message: &str);
}
