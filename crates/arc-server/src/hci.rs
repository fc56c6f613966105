//! Raw HCI advertising requests, abstracted for tests.

use thiserror::Error;

/// Fixed per-request budget; a stalled controller fails the operation.
pub const HCI_REQUEST_TIMEOUT_MS: u64 = 1000;

/// Connectable undirected advertising.
pub const ADV_TYPE_CONNECTABLE_UNDIRECTED: u8 = 0x00;

/// LE advertising parameter block, reprogrammed before every enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvParams {
    pub interval_min: u16,
    pub interval_max: u16,
    pub adv_type: u8,
    pub channel_map: u8,
}

/// HCI request failure. A timeout is a hard failure of the one operation;
/// there is no cancellation and no retry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HciError {
    #[error("hci request {0} failed")]
    RequestFailed(&'static str),
    #[error("hci request {0} timed out after {HCI_REQUEST_TIMEOUT_MS} ms")]
    Timeout(&'static str),
}

/// Blocking HCI request surface used by the advertising controller.
///
/// Each call may block the event thread for up to
/// [`HCI_REQUEST_TIMEOUT_MS`].
pub trait HciRequests {
    fn set_adv_params(&mut self, params: &AdvParams) -> Result<(), HciError>;
    fn set_adv_data(&mut self, data: &[u8]) -> Result<(), HciError>;
    fn set_adv_enable(&mut self, enable: bool) -> Result<(), HciError>;
}

/// One recorded HCI request, kept verbatim for ordering assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HciCall {
    SetParams(AdvParams),
    SetData(Vec<u8>),
    SetEnable(bool),
}

/// In-memory controller double recording every request.
#[derive(Debug, Default)]
pub struct MockHci {
    pub calls: Vec<HciCall>,
    fail_next: Option<&'static str>,
}

impl MockHci {
    /// Makes the next matching request fail; `op` is one of `"params"`,
    /// `"data"`, `"enable"`.
    pub fn fail_next(&mut self, op: &'static str) {
        self.fail_next = Some(op);
    }

    pub fn take_calls(&mut self) -> Vec<HciCall> {
        std::mem::take(&mut self.calls)
    }

    fn check(&mut self, op: &'static str) -> Result<(), HciError> {
        if self.fail_next == Some(op) {
            self.fail_next = None;
            return Err(HciError::RequestFailed(op));
        }
        Ok(())
    }
}

impl HciRequests for MockHci {
    fn set_adv_params(&mut self, params: &AdvParams) -> Result<(), HciError> {
        self.check("params")?;
        self.calls.push(HciCall::SetParams(*params));
        Ok(())
    }

    fn set_adv_data(&mut self, data: &[u8]) -> Result<(), HciError> {
        self.check("data")?;
        self.calls.push(HciCall::SetData(data.to_vec()));
        Ok(())
    }

    fn set_adv_enable(&mut self, enable: bool) -> Result<(), HciError> {
        self.check("enable")?;
        self.calls.push(HciCall::SetEnable(enable));
        Ok(())
    }
}
