use yew::AttrValue;

pub type ToastId = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Default,
    Success,
    Destructive,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Default => "toast-default",
            Self::Success => "toast-success",
            Self::Destructive => "toast-destructive",
        }
    }
}

/// What a producer asks the toaster to show.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastRequest {
    pub kind: ToastKind,
    pub title: AttrValue,
    pub description: Option<AttrValue>,
}

impl ToastRequest {
    pub fn new(title: impl Into<AttrValue>) -> Self {
        Self {
            kind: ToastKind::Default,
            title: title.into(),
            description: None,
        }
    }

    pub fn description(mut self, description: impl Into<AttrValue>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn kind(mut self, kind: ToastKind) -> Self {
        self.kind = kind;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub title: AttrValue,
    pub description: Option<AttrValue>,
    // closed toasts stay queued until removed, so they can animate out
    pub open: bool,
}

/// Bounded list of toasts, newest first.
///
/// Adding past `limit` drops the oldest toasts. Dismissing only closes a
/// toast, removing drops it. Ids are never reused.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    limit: usize,
    next_id: ToastId,
}

impl ToastQueue {
    pub fn new(limit: usize) -> Self {
        Self {
            toasts: Vec::new(),
            limit,
            next_id: 1,
        }
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    // Shrinking drops the oldest toasts right away.
    pub fn set_limit(&mut self, limit: usize) -> bool {
        self.limit = limit;
        let before = self.toasts.len();
        self.toasts.truncate(limit);
        before != self.toasts.len()
    }

    pub fn add(&mut self, request: ToastRequest) -> ToastId {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);

        let ToastRequest {
            kind,
            title,
            description,
        } = request;

        self.toasts.insert(
            0,
            Toast {
                id,
                kind,
                title,
                description,
                open: true,
            },
        );
        self.toasts.truncate(self.limit);
        id
    }

    pub fn update(&mut self, id: ToastId, request: ToastRequest) -> bool {
        match self.toasts.iter_mut().find(|toast| toast.id == id) {
            Some(toast) => {
                toast.kind = request.kind;
                toast.title = request.title;
                toast.description = request.description;
                true
            }
            None => false,
        }
    }

    // `None` closes every toast
    pub fn dismiss(&mut self, id: Option<ToastId>) -> bool {
        let mut changed = false;
        for toast in self
            .toasts
            .iter_mut()
            .filter(|toast| toast.open && id.map_or(true, |id| toast.id == id))
        {
            toast.open = false;
            changed = true;
        }
        changed
    }

    // `None` drops every toast
    pub fn remove(&mut self, id: Option<ToastId>) -> bool {
        let before = self.toasts.len();
        match id {
            Some(id) => self.toasts.retain(|toast| toast.id != id),
            None => self.toasts.clear(),
        }
        before != self.toasts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(queue: &ToastQueue) -> Vec<&str> {
        queue.toasts().iter().map(|toast| toast.title.as_str()).collect()
    }

    #[test]
    fn test_newest_first_and_bounded() {
        let mut queue = ToastQueue::new(2);

        queue.add(ToastRequest::new("first"));
        queue.add(ToastRequest::new("second"));
        queue.add(ToastRequest::new("third"));

        assert_eq!(titles(&queue), vec!["third", "second"]);
    }

    #[test]
    fn test_set_limit() {
        let mut queue = ToastQueue::new(3);
        queue.add(ToastRequest::new("first"));
        queue.add(ToastRequest::new("second"));
        queue.add(ToastRequest::new("third"));

        assert!(queue.set_limit(1));
        assert_eq!(titles(&queue), vec!["third"]);

        assert!(!queue.set_limit(2));
        queue.add(ToastRequest::new("fourth"));
        queue.add(ToastRequest::new("fifth"));
        assert_eq!(titles(&queue), vec!["fifth", "fourth"]);
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut queue = ToastQueue::new(1);

        let a = queue.add(ToastRequest::new("a"));
        let b = queue.add(ToastRequest::new("b"));
        queue.remove(None);
        let c = queue.add(ToastRequest::new("c"));

        assert!(a < b && b < c);
    }

    #[test]
    fn test_dismiss_closes_without_removing() {
        let mut queue = ToastQueue::new(3);
        let id = queue.add(ToastRequest::new("saved").kind(ToastKind::Success));
        queue.add(ToastRequest::new("other"));

        assert!(queue.dismiss(Some(id)));
        assert!(!queue.dismiss(Some(id)));

        let dismissed = queue.toasts().iter().find(|t| t.id == id).unwrap();
        assert!(!dismissed.open);
        assert_eq!(queue.toasts().len(), 2);
        assert_eq!(queue.toasts().iter().filter(|t| t.open).count(), 1);
    }

    #[test]
    fn test_dismiss_all() {
        let mut queue = ToastQueue::new(3);
        queue.add(ToastRequest::new("a"));
        queue.add(ToastRequest::new("b"));

        assert!(queue.dismiss(None));
        assert!(queue.toasts().iter().all(|t| !t.open));
    }

    #[test]
    fn test_remove() {
        let mut queue = ToastQueue::new(3);
        let a = queue.add(ToastRequest::new("a"));
        queue.add(ToastRequest::new("b"));

        assert!(queue.remove(Some(a)));
        assert!(!queue.remove(Some(a)));
        assert_eq!(titles(&queue), vec!["b"]);

        assert!(queue.remove(None));
        assert!(queue.toasts().is_empty());
    }

    #[test]
    fn test_update_keeps_position() {
        let mut queue = ToastQueue::new(3);
        let a = queue.add(ToastRequest::new("uploading"));
        queue.add(ToastRequest::new("other"));

        assert!(queue.update(
            a,
            ToastRequest::new("uploaded")
                .description("3 brands")
                .kind(ToastKind::Success)
        ));
        assert!(!queue.update(99, ToastRequest::new("missing")));

        assert_eq!(titles(&queue), vec!["other", "uploaded"]);
        let updated = &queue.toasts()[1];
        assert_eq!(updated.kind, ToastKind::Success);
        assert_eq!(updated.description.as_ref().map(|d| d.as_str()), Some("3 brands"));
    }
}
