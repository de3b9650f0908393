use tokio::sync::mpsc;

use up_core::message::{CodecRequest, CodecResponse, HostEvent};

pub type CodecRequestSender = mpsc::Sender<CodecRequest>;
pub type CodecRequestReceiver = mpsc::Receiver<CodecRequest>;

pub type CodecResponseSender = mpsc::Sender<CodecResponse>;
pub type CodecResponseReceiver = mpsc::Receiver<CodecResponse>;

pub type HostEventSender = mpsc::Sender<HostEvent>;
pub type HostEventReceiver = mpsc::Receiver<HostEvent>;
