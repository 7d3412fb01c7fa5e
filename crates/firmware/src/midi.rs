//! USB-MIDI output.
//!
//! The application loop must never wait on USB, so [`UsbMidiOutput`] only queues event packets; the [`midi_writer`]
//! task drains the queue into the USB endpoint.

use chord_machine_lib::io::{MidiOutput, usb_midi_packet};
use defmt::{error, info, panic, warn};
use embassy_stm32::{peripherals, usb};
use embassy_sync::{
    blocking_mutex::raw::CriticalSectionRawMutex,
    channel::{Channel, Receiver, Sender},
};
use embassy_usb::{class::midi::MidiClass, driver::EndpointError};
use wmidi::MidiMessage;

pub type UsbDriver = usb::Driver<'static, peripherals::USB_OTG_FS>;

/// Number of packets which may wait for the USB endpoint. A full chord is three.
const MIDI_QUEUE_DEPTH: usize = 64;

/// The only virtual cable the device exposes.
const CABLE: u8 = 0;

type MidiQueue = Channel<CriticalSectionRawMutex, [u8; 4], MIDI_QUEUE_DEPTH>;
pub type MidiQueueSender<'a> = Sender<'a, CriticalSectionRawMutex, [u8; 4], MIDI_QUEUE_DEPTH>;
pub type MidiQueueReceiver<'a> = Receiver<'a, CriticalSectionRawMutex, [u8; 4], MIDI_QUEUE_DEPTH>;

/// USB-MIDI Event Packets on their way to the host.
pub static MIDI_QUEUE: MidiQueue = Channel::new();

/// A [`MidiOutput`] which queues messages for [`midi_writer`].
pub struct UsbMidiOutput {
    queue: MidiQueueSender<'static>,
}

impl UsbMidiOutput {
    /// Constructs a [`UsbMidiOutput`] which feeds `queue`.
    pub fn new(queue: MidiQueueSender<'static>) -> Self {
        Self { queue }
    }
}

impl MidiOutput for UsbMidiOutput {
    fn send(&mut self, message: MidiMessage<'static>) {
        let Some(packet) = usb_midi_packet(CABLE, &message) else {
            warn!("Not a channel voice message; dropping it");
            return;
        };
        if self.queue.try_send(packet).is_err() {
            error!("MIDI queue is full; dropping {}", packet);
        }
    }
}

#[doc(hidden)]
struct Disconnected {}

impl From<EndpointError> for Disconnected {
    fn from(val: EndpointError) -> Self {
        match val {
            EndpointError::BufferOverflow => panic!("Buffer overflow"),
            EndpointError::Disabled => Disconnected {},
        }
    }
}

/// Task responsible for writing queued MIDI to the host. Packets queued while no host is connected are sent once
/// one connects, unless the queue overflowed in the meantime.
#[embassy_executor::task]
pub async fn midi_writer(
    mut class: MidiClass<'static, UsbDriver>,
    queue: MidiQueueReceiver<'static>,
) -> ! {
    loop {
        class.wait_connection().await;
        info!("USB connected");
        let _ = write_midi(&mut class, &queue).await;
        info!("USB disconnected");
    }
}

async fn write_midi(
    class: &mut MidiClass<'static, UsbDriver>,
    queue: &MidiQueueReceiver<'static>,
) -> Result<(), Disconnected> {
    loop {
        let packet = queue.receive().await;
        class.write_packet(&packet).await?;
    }
}
