use bunner_csrf_rs::{Enforcement, ForbiddenResponse, InvalidCrossOriginRequest};

pub fn assert_forbidden(
    outcome: Result<Enforcement, InvalidCrossOriginRequest>,
) -> ForbiddenResponse {
    match outcome {
        Ok(Enforcement::Respond(response)) => response,
        other => panic!("expected forbidden response, got {:?}", other),
    }
}

pub fn assert_raised(
    outcome: Result<Enforcement, InvalidCrossOriginRequest>,
) -> InvalidCrossOriginRequest {
    match outcome {
        Err(error) => error,
        other => panic!("expected raised rejection, got {:?}", other),
    }
}

pub fn assert_proceed(outcome: Result<Enforcement, InvalidCrossOriginRequest>) {
    match outcome {
        Ok(Enforcement::Proceed) => {}
        other => panic!("expected request to proceed, got {:?}", other),
    }
}
