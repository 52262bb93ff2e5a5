use std::marker::PhantomData;

use crate::credentials::Credentials;

/// Per-call bundle handed to a connector: the immutable credentials plus the
/// flow-specific request payload. Constructed fresh for every call and
/// discarded once the call completes.
#[derive(Clone, Debug)]
pub struct GatewayRouterData<F, Req> {
    pub credentials: Credentials,
    pub request: Req,
    flow: PhantomData<F>,
}

impl<F, Req> GatewayRouterData<F, Req> {
    pub fn new(credentials: Credentials, request: Req) -> Self {
        Self {
            credentials,
            request,
            flow: PhantomData,
        }
    }
}
