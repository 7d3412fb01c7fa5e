//! Chord Machine is [Embassy](https://embassy.dev)-based firmware for a hand-held instrument whose seven buttons play
//! the diatonic chords of a selectable key over USB-MIDI. The firmware runs on the [Nucleo-F767ZI development
//! board](https://www.st.com/en/evaluation-tools/nucleo-f767zi.html), which is powered by an F7-series STM32
//! microcontroller.
//!
//! All of the instrument's behavior lives in `chord_machine_lib`; this crate only implements its peripheral traits
//! with the board's GPIOs and USB port and runs the application loop. Until a display and an LED matrix are attached,
//! the display is mirrored to the RTT log and the LEDs are summarized on the board's user LEDs.
//!
//! Pinout (all inputs use internal pull-ups and are active low):
//!
//! | function | pins |
//! |---|---|
//! | chord buttons I-VII | PE2, PE3, PE4, PE5, PE6, PF7, PF8 |
//! | function button | PF9 |
//! | encoder A / B / switch | PG2 / PG3 / PD1 |

#![no_std]
#![no_main]

mod buttons;
mod configuration;
mod display;
mod encoder;
mod leds;
mod midi;

use crate::{
    buttons::GpioButtons,
    display::LogDisplay,
    encoder::GpioEncoder,
    leds::BoardLeds,
    midi::{MIDI_QUEUE, UsbDriver, UsbMidiOutput, midi_writer},
};
use chord_machine_lib::{app::ChordMachine, io::HardwarePort};
use defmt::{panic, *};
use embassy_executor::Spawner;
use embassy_stm32::{
    Config, bind_interrupts,
    gpio::{Input, Level, Output, Pull, Speed},
    peripherals,
    time::Hertz,
    usb,
};
use embassy_time::Timer;
use embassy_usb::{Builder, UsbDevice, class::midi::MidiClass};
use static_cell::StaticCell;

#[cfg(feature = "defmt-rtt")]
use defmt_rtt as _;
#[cfg(not(feature = "panic-probe"))]
use panic_halt as _;
#[cfg(feature = "panic-probe")]
use panic_probe as _;

bind_interrupts!(
    #[doc(hidden)]
    struct Irqs {
        OTG_FS => usb::InterruptHandler<peripherals::USB_OTG_FS>;
    }
);

type Machine = ChordMachine<GpioButtons, GpioEncoder, LogDisplay, BoardLeds, UsbMidiOutput>;

/// Time between iterations of the application loop.
const LOOP_PERIOD_MS: u64 = 1;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Initializing Chord Machine");

    let mut config = Config::default();
    {
        use embassy_stm32::rcc::*;
        // hse: high-speed external clock
        config.rcc.hse = Some(Hse {
            freq: Hertz(8_000_000),
            mode: HseMode::Bypass,
        });

        // pll: phase-locked loop, crucial for dividing clock
        config.rcc.pll_src = PllSource::HSE;
        config.rcc.pll = Some(Pll {
            prediv: PllPreDiv::DIV4,
            mul: PllMul::MUL216,
            divp: Some(PllPDiv::DIV2), // 8mhz / 4 * 216 / 2 = 216Mhz
            // the 48MHz clock used for USB OTG FS is derived from the main PLL VCO (PLLQ clock), per section 5.2 of
            // RM0410
            divq: Some(PllQDiv::DIV9), // 8mhz / 4 * 216 / 9 = 48Mhz
            divr: None,
        });
        config.rcc.ahb_pre = AHBPrescaler::DIV1;
        config.rcc.apb1_pre = APBPrescaler::DIV4;
        config.rcc.apb2_pre = APBPrescaler::DIV2;
        config.rcc.sys = Sysclk::PLL1_P;
        config.rcc.mux.clk48sel = mux::Clk48sel::PLL1_Q;
    }
    let p = embassy_stm32::init(config);

    let chord_machine_config = match configuration::config() {
        Ok(config) => config,
        Err(error) => panic!("Invalid configuration: {}", error),
    };

    static ENDPOINT_OUT_BUFFER: StaticCell<[u8; 256]> = StaticCell::new();
    let mut config = embassy_stm32::usb::Config::default();

    // USB devices which are self-powered need to enable vbus_detection to comply with the USB spec. Per section 6.10
    // of the Nucleo board manual (UM1974), CN13 (the USB port) cannot power the board.
    config.vbus_detection = true;

    let driver = usb::Driver::new_fs(
        p.USB_OTG_FS,
        Irqs,
        p.PA12,
        p.PA11,
        ENDPOINT_OUT_BUFFER.init([0; 256]),
        config,
    );

    // per https://pid.codes, 0x1209/0x0001 is reserved for testing and must not be shipped
    let vendor_id = 0x1209;
    let product_id = 0x0001;

    let mut config = embassy_usb::Config::new(vendor_id, product_id);
    config.manufacturer = Some("Chord Machine contributors");
    config.product = Some("Chord Machine");
    config.self_powered = true;
    config.max_power = 0;

    static CONFIG_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
    static BOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
    static CONTROL_BUFFER: StaticCell<[u8; 64]> = StaticCell::new();

    let mut builder = Builder::new(
        driver,
        config,
        CONFIG_DESCRIPTOR.init([0; 256]),
        BOS_DESCRIPTOR.init([0; 256]),
        &mut [], // no msos descriptors
        CONTROL_BUFFER.init([0; 64]),
    );

    // the device only sends, but the class needs at least one jack in each direction
    let class = MidiClass::new(&mut builder, 1, 1, 64);
    let usb = builder.build();

    unwrap!(spawner.spawn(usb_task(usb)));
    unwrap!(spawner.spawn(midi_writer(class, MIDI_QUEUE.receiver())));

    let buttons = GpioButtons::new([
        Input::new(p.PE2, Pull::Up),
        Input::new(p.PE3, Pull::Up),
        Input::new(p.PE4, Pull::Up),
        Input::new(p.PE5, Pull::Up),
        Input::new(p.PE6, Pull::Up),
        Input::new(p.PF7, Pull::Up),
        Input::new(p.PF8, Pull::Up),
        Input::new(p.PF9, Pull::Up),
    ]);
    let encoder = GpioEncoder::new(
        Input::new(p.PG2, Pull::Up),
        Input::new(p.PG3, Pull::Up),
        Input::new(p.PD1, Pull::Up),
    );
    let leds = BoardLeds::new(
        Output::new(p.PB0, Level::Low, Speed::Low),
        Output::new(p.PB7, Level::Low, Speed::Low),
        Output::new(p.PB14, Level::Low, Speed::Low),
    );
    let midi_output = UsbMidiOutput::new(MIDI_QUEUE.sender());

    let port = HardwarePort::new(buttons, encoder, LogDisplay::default(), leds, midi_output);
    let chord_machine = match ChordMachine::new(port, chord_machine_config) {
        Ok(chord_machine) => chord_machine,
        Err(error) => panic!("Could not start the Chord Machine: {}", error),
    };
    unwrap!(spawner.spawn(chord_machine_task(chord_machine)));
}

/// Task responsible for running the application loop.
#[embassy_executor::task]
async fn chord_machine_task(mut chord_machine: Machine) -> ! {
    loop {
        chord_machine.update();
        Timer::after_millis(LOOP_PERIOD_MS).await;
    }
}

#[embassy_executor::task]
async fn usb_task(mut usb: UsbDevice<'static, UsbDriver>) -> ! {
    usb.run().await
}
