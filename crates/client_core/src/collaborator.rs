use shared::error::ServiceError;

/// The party that actually answers request lines.
///
/// Calls are synchronous: the caller is suspended until the reply (or the
/// failure) comes back. Connection details belong to the implementation and
/// are fixed when it is constructed.
pub trait ServiceCollaborator {
    fn send(&mut self, request: &str) -> Result<String, ServiceError>;
}

impl<T: ServiceCollaborator + ?Sized> ServiceCollaborator for Box<T> {
    fn send(&mut self, request: &str) -> Result<String, ServiceError> {
        (**self).send(request)
    }
}

/// Collaborator for windows that only run local commands.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoService;

impl ServiceCollaborator for NoService {
    fn send(&mut self, request: &str) -> Result<String, ServiceError> {
        Err(ServiceError::Unavailable(format!(
            "no service attached for request `{request}`"
        )))
    }
}
