// This file is part of kroma-rs.
//
// kroma-rs is free software: you can redistribute it and/or modify it under the
// terms of the GNU Lesser General Public License as published by the Free Software
// Foundation, either version 3 of the License, or (at your option) any later version.
//
// kroma-rs is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with kroma-rs.
// If not, see https://www.gnu.org/licenses/.

use std::{
    task::{Context, Poll},
    time::Instant,
};

use alloy_json_rpc::{RequestPacket, ResponsePacket};
use alloy_transport::{BoxFuture, TransportError};
use futures_util::FutureExt;
use metrics::{Counter, Gauge, Histogram};
use metrics_derive::Metrics;
use tower::{Layer, Service};

#[derive(Metrics)]
#[metrics(scope = "kroma_provider_client")]
struct MethodMetrics {
    #[metric(describe = "total count of requests.")]
    num_requests: Counter,

    #[metric(describe = "the number of open requests.")]
    open_requests: Gauge,

    #[metric(describe = "the distribution of request latency.")]
    request_latency: Histogram,

    #[metric(describe = "the count of failed requests.")]
    num_errors: Counter,
}

impl MethodMetrics {
    fn new(method_name: &str) -> Self {
        Self::new_with_labels(&[("method_name", method_name.to_string())])
    }
}

/// RPC client metric layer.
#[derive(Default)]
pub(crate) struct ClientMetricLayer {}

impl<S> Layer<S> for ClientMetricLayer
where
    S: Service<RequestPacket, Response = ResponsePacket, Error = TransportError> + Sync,
{
    type Service = ClientMetricMiddleware<S>;

    fn layer(&self, service: S) -> Self::Service {
        ClientMetricMiddleware::new(service)
    }
}

pub(crate) struct ClientMetricMiddleware<S> {
    service: S,
}

impl<S> ClientMetricMiddleware<S>
where
    S: Service<RequestPacket, Response = ResponsePacket, Error = TransportError> + Sync,
{
    pub(crate) fn new(service: S) -> Self {
        Self { service }
    }
}

impl<S> Clone for ClientMetricMiddleware<S>
where
    S: Clone,
{
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}

impl<S> Service<RequestPacket> for ClientMetricMiddleware<S>
where
    S: Service<RequestPacket, Response = ResponsePacket, Error = TransportError>
        + Sync
        + Send
        + Clone
        + 'static,
    S::Future: Send,
{
    type Response = ResponsePacket;
    type Error = TransportError;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&mut self, request: RequestPacket) -> Self::Future {
        let metrics = MethodMetrics::new(&get_method_name(&request));
        metrics.num_requests.increment(1);
        metrics.open_requests.increment(1);
        let start = Instant::now();
        let mut svc = self.service.clone();
        async move {
            let response = svc.call(request).await;
            metrics.open_requests.decrement(1);
            metrics
                .request_latency
                .record(start.elapsed().as_millis() as f64);
            if response.is_err() {
                metrics.num_errors.increment(1);
            }
            response
        }
        .boxed()
    }
}

/// Get the method name from the request
fn get_method_name(req: &RequestPacket) -> String {
    match req {
        RequestPacket::Single(request) => request.method().to_string(),
        RequestPacket::Batch(_) => {
            // can't extract method name for batch.
            "batch".to_string()
        }
    }
}
