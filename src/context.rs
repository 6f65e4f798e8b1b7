/// Read-only view of the parts of an inbound request the gatekeeper looks at.
///
/// `origin` is `None` for same-origin and non-browser traffic.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub fn new(method: &'a str, origin: Option<&'a str>) -> Self {
        Self { method, origin }
    }

    pub fn is_preflight(&self) -> bool {
        self.method.eq_ignore_ascii_case(crate::constants::method::OPTIONS)
    }
}
