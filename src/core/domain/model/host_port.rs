//! Initiator ports registered on a host: iSCSI IQNs and Fibre Channel PWWNs.

use crate::core::domain::value_object::ObjectRef;
use serde::{Deserialize, Serialize};

/// An iSCSI qualified name attached to a host (`/host_iqns`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HostIqn {
    pub id: i64,
    pub host: ObjectRef,
    pub iqn: String,
}

/// A Fibre Channel port WWN attached to a host (`/host_fc_ports`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HostPwwn {
    pub id: i64,
    pub host: ObjectRef,
    pub pwwn: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateHostIqnRequest<'a> {
    pub iqn: &'a str,
    pub host: ObjectRef,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateHostPwwnRequest<'a> {
    pub pwwn: &'a str,
    pub host: ObjectRef,
}
