// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Typed accessors, one get/set pair per declared field plus one count per
//! repeated kind.
//!
//! Every method is a thin wrapper over the generic field layer in
//! [`store`](crate::store); the macros below only fix the Rust type and the
//! index parameters. Fields a schema version does not support still have
//! accessors: their getters return `None` and their setters do nothing.

use crate::schema::{EntityKind, fields};
use crate::store::MetadataStore;

macro_rules! field_accessors {
    ($( $get:ident / $set:ident : $ty:ty = $def:ident ( $($idx:ident),* ) ;)*) => {
        impl MetadataStore {
            $(
                pub fn $get(&self, $($idx: usize),*) -> Option<$ty> {
                    self.get_typed(&fields::$def, &[$($idx),*])
                }

                pub fn $set(&mut self, value: impl Into<Option<$ty>>, $($idx: usize),*) {
                    self.set_typed(&fields::$def, value.into(), &[$($idx),*]);
                }
            )*
        }
    };
}

macro_rules! reference_accessors {
    ($( $get:ident / $set:ident = $def:ident ( $($idx:ident),* ) ;)*) => {
        impl MetadataStore {
            $(
                /// Identifier of the referenced entity
                pub fn $get(&self, $($idx: usize),*) -> Option<String> {
                    self.get_typed(&fields::$def, &[$($idx),*])
                }

                /// Links to the entity with this identifier, creating a stub if
                /// none exists yet
                pub fn $set(&mut self, id: Option<&str>, $($idx: usize),*) {
                    if let Some(id) = id {
                        self.link(&fields::$def, id, &[$($idx),*]);
                    }
                }
            )*
        }
    };
}

macro_rules! count_accessors {
    ($( $name:ident ( $($idx:ident),* ) => $kind:ident ;)*) => {
        impl MetadataStore {
            $(
                pub fn $name(&self, $($idx: usize),*) -> usize {
                    self.count(EntityKind::$kind, &[$($idx),*])
                }
            )*
        }
    };
}

count_accessors! {
    project_count() => Project;
    dataset_count() => Dataset;
    experiment_count() => Experiment;
    experimenter_count() => Experimenter;
    group_count() => Group;
    image_count() => Image;
    instrument_count() => Instrument;
    plate_count() => Plate;
    screen_count() => Screen;
    pixels_count(image_index) => Pixels;
    plane_count(image_index, pixels_index) => Plane;
    tiff_data_count(image_index, pixels_index) => TiffData;
    logical_channel_count(image_index) => LogicalChannel;
    channel_component_count(image_index, logical_channel_index) => ChannelComponent;
    roi_count(image_index) => Roi;
    light_source_count(instrument_index) => LightSource;
    detector_count(instrument_index) => Detector;
    objective_count(instrument_index) => Objective;
    filter_count(instrument_index) => Filter;
    otf_count(instrument_index) => Otf;
    well_count(plate_index) => Well;
    well_sample_count(plate_index, well_index) => WellSample;
    reagent_count(screen_index) => Reagent;
}

reference_accessors! {
    dataset_project_ref / set_dataset_project_ref = DATASET_PROJECT(dataset_index);
    experiment_experimenter_ref / set_experiment_experimenter_ref = EXPERIMENT_EXPERIMENTER(experiment_index);
    experimenter_group_ref / set_experimenter_group_ref = EXPERIMENTER_GROUP(experimenter_index);
    image_experimenter_ref / set_image_experimenter_ref = IMAGE_EXPERIMENTER(image_index);
    image_group_ref / set_image_group_ref = IMAGE_GROUP(image_index);
    image_instrument_ref / set_image_instrument_ref = IMAGE_INSTRUMENT(image_index);
    image_dataset_ref / set_image_dataset_ref = IMAGE_DATASET(image_index);
    plate_screen_ref / set_plate_screen_ref = PLATE_SCREEN(plate_index);
    well_sample_image_ref / set_well_sample_image_ref = WELL_SAMPLE_IMAGE(plate_index, well_index, well_sample_index);
    detector_settings_detector / set_detector_settings_detector = DETECTOR_SETTINGS_DETECTOR(image_index, logical_channel_index);
    light_source_settings_light_source / set_light_source_settings_light_source = LIGHT_SOURCE_SETTINGS_LIGHT_SOURCE(image_index, logical_channel_index);
    objective_settings_objective / set_objective_settings_objective = OBJECTIVE_SETTINGS_OBJECTIVE(image_index);
}

field_accessors! {
    project_id / set_project_id: String = PROJECT_ID(project_index);
    project_name / set_project_name: String = PROJECT_NAME(project_index);
    project_description / set_project_description: String = PROJECT_DESCRIPTION(project_index);

    dataset_id / set_dataset_id: String = DATASET_ID(dataset_index);
    dataset_name / set_dataset_name: String = DATASET_NAME(dataset_index);
    dataset_description / set_dataset_description: String = DATASET_DESCRIPTION(dataset_index);
    dataset_locked / set_dataset_locked: bool = DATASET_LOCKED(dataset_index);

    experiment_id / set_experiment_id: String = EXPERIMENT_ID(experiment_index);
    experiment_description / set_experiment_description: String = EXPERIMENT_DESCRIPTION(experiment_index);
    experiment_type / set_experiment_type: String = EXPERIMENT_TYPE(experiment_index);

    experimenter_id / set_experimenter_id: String = EXPERIMENTER_ID(experimenter_index);
    experimenter_first_name / set_experimenter_first_name: String = EXPERIMENTER_FIRST_NAME(experimenter_index);
    experimenter_last_name / set_experimenter_last_name: String = EXPERIMENTER_LAST_NAME(experimenter_index);
    experimenter_email / set_experimenter_email: String = EXPERIMENTER_EMAIL(experimenter_index);
    experimenter_institution / set_experimenter_institution: String = EXPERIMENTER_INSTITUTION(experimenter_index);
    experimenter_data_directory / set_experimenter_data_directory: String = EXPERIMENTER_DATA_DIRECTORY(experimenter_index);

    group_id / set_group_id: String = GROUP_ID(group_index);
    group_name / set_group_name: String = GROUP_NAME(group_index);

    image_id / set_image_id: String = IMAGE_ID(image_index);
    image_name / set_image_name: String = IMAGE_NAME(image_index);
    image_creation_date / set_image_creation_date: String = IMAGE_CREATION_DATE(image_index);
    image_description / set_image_description: String = IMAGE_DESCRIPTION(image_index);

    pixels_id / set_pixels_id: String = PIXELS_ID(image_index, pixels_index);
    pixels_size_x / set_pixels_size_x: i32 = PIXELS_SIZE_X(image_index, pixels_index);
    pixels_size_y / set_pixels_size_y: i32 = PIXELS_SIZE_Y(image_index, pixels_index);
    pixels_size_z / set_pixels_size_z: i32 = PIXELS_SIZE_Z(image_index, pixels_index);
    pixels_size_c / set_pixels_size_c: i32 = PIXELS_SIZE_C(image_index, pixels_index);
    pixels_size_t / set_pixels_size_t: i32 = PIXELS_SIZE_T(image_index, pixels_index);
    pixels_pixel_type / set_pixels_pixel_type: String = PIXELS_PIXEL_TYPE(image_index, pixels_index);
    pixels_big_endian / set_pixels_big_endian: bool = PIXELS_BIG_ENDIAN(image_index, pixels_index);
    pixels_dimension_order / set_pixels_dimension_order: String = PIXELS_DIMENSION_ORDER(image_index, pixels_index);
    pixels_physical_size_x / set_pixels_physical_size_x: f64 = PIXELS_PHYSICAL_SIZE_X(image_index, pixels_index);
    pixels_physical_size_y / set_pixels_physical_size_y: f64 = PIXELS_PHYSICAL_SIZE_Y(image_index, pixels_index);
    pixels_physical_size_z / set_pixels_physical_size_z: f64 = PIXELS_PHYSICAL_SIZE_Z(image_index, pixels_index);
    pixels_time_increment / set_pixels_time_increment: f64 = PIXELS_TIME_INCREMENT(image_index, pixels_index);
    pixels_wave_start / set_pixels_wave_start: i32 = PIXELS_WAVE_START(image_index, pixels_index);
    pixels_wave_increment / set_pixels_wave_increment: i32 = PIXELS_WAVE_INCREMENT(image_index, pixels_index);

    plane_the_z / set_plane_the_z: i32 = PLANE_THE_Z(image_index, pixels_index, plane_index);
    plane_the_c / set_plane_the_c: i32 = PLANE_THE_C(image_index, pixels_index, plane_index);
    plane_the_t / set_plane_the_t: i32 = PLANE_THE_T(image_index, pixels_index, plane_index);
    plane_hash_sha1 / set_plane_hash_sha1: Vec<u8> = PLANE_HASH_SHA1(image_index, pixels_index, plane_index);
    plane_timing_delta_t / set_plane_timing_delta_t: f64 = PLANE_TIMING_DELTA_T(image_index, pixels_index, plane_index);
    plane_timing_exposure_time / set_plane_timing_exposure_time: f64 = PLANE_TIMING_EXPOSURE_TIME(image_index, pixels_index, plane_index);
    stage_position_position_x / set_stage_position_position_x: f64 = STAGE_POSITION_POSITION_X(image_index, pixels_index, plane_index);
    stage_position_position_y / set_stage_position_position_y: f64 = STAGE_POSITION_POSITION_Y(image_index, pixels_index, plane_index);
    stage_position_position_z / set_stage_position_position_z: f64 = STAGE_POSITION_POSITION_Z(image_index, pixels_index, plane_index);

    tiff_data_first_z / set_tiff_data_first_z: i32 = TIFF_DATA_FIRST_Z(image_index, pixels_index, tiff_data_index);
    tiff_data_first_c / set_tiff_data_first_c: i32 = TIFF_DATA_FIRST_C(image_index, pixels_index, tiff_data_index);
    tiff_data_first_t / set_tiff_data_first_t: i32 = TIFF_DATA_FIRST_T(image_index, pixels_index, tiff_data_index);
    tiff_data_ifd / set_tiff_data_ifd: i32 = TIFF_DATA_IFD(image_index, pixels_index, tiff_data_index);
    tiff_data_num_planes / set_tiff_data_num_planes: i32 = TIFF_DATA_NUM_PLANES(image_index, pixels_index, tiff_data_index);
    tiff_data_file_name / set_tiff_data_file_name: String = TIFF_DATA_FILE_NAME(image_index, pixels_index, tiff_data_index);
    tiff_data_uuid / set_tiff_data_uuid: String = TIFF_DATA_UUID(image_index, pixels_index, tiff_data_index);

    logical_channel_id / set_logical_channel_id: String = LOGICAL_CHANNEL_ID(image_index, logical_channel_index);
    logical_channel_name / set_logical_channel_name: String = LOGICAL_CHANNEL_NAME(image_index, logical_channel_index);
    logical_channel_samples_per_pixel / set_logical_channel_samples_per_pixel: i32 = LOGICAL_CHANNEL_SAMPLES_PER_PIXEL(image_index, logical_channel_index);
    logical_channel_illumination_type / set_logical_channel_illumination_type: String = LOGICAL_CHANNEL_ILLUMINATION_TYPE(image_index, logical_channel_index);
    logical_channel_pinhole_size / set_logical_channel_pinhole_size: f64 = LOGICAL_CHANNEL_PINHOLE_SIZE(image_index, logical_channel_index);
    logical_channel_photometric_interpretation / set_logical_channel_photometric_interpretation: String = LOGICAL_CHANNEL_PHOTOMETRIC_INTERPRETATION(image_index, logical_channel_index);
    logical_channel_mode / set_logical_channel_mode: String = LOGICAL_CHANNEL_MODE(image_index, logical_channel_index);
    logical_channel_contrast_method / set_logical_channel_contrast_method: String = LOGICAL_CHANNEL_CONTRAST_METHOD(image_index, logical_channel_index);
    logical_channel_ex_wave / set_logical_channel_ex_wave: i32 = LOGICAL_CHANNEL_EX_WAVE(image_index, logical_channel_index);
    logical_channel_em_wave / set_logical_channel_em_wave: i32 = LOGICAL_CHANNEL_EM_WAVE(image_index, logical_channel_index);
    logical_channel_fluor / set_logical_channel_fluor: String = LOGICAL_CHANNEL_FLUOR(image_index, logical_channel_index);
    logical_channel_nd_filter / set_logical_channel_nd_filter: f64 = LOGICAL_CHANNEL_ND_FILTER(image_index, logical_channel_index);
    logical_channel_pockel_cell_setting / set_logical_channel_pockel_cell_setting: i32 = LOGICAL_CHANNEL_POCKEL_CELL_SETTING(image_index, logical_channel_index);

    channel_component_index / set_channel_component_index: i32 = CHANNEL_COMPONENT_INDEX(image_index, logical_channel_index, channel_component_index);
    channel_component_color_domain / set_channel_component_color_domain: String = CHANNEL_COMPONENT_COLOR_DOMAIN(image_index, logical_channel_index, channel_component_index);

    detector_settings_offset / set_detector_settings_offset: f64 = DETECTOR_SETTINGS_OFFSET(image_index, logical_channel_index);
    detector_settings_gain / set_detector_settings_gain: f64 = DETECTOR_SETTINGS_GAIN(image_index, logical_channel_index);
    light_source_settings_attenuation / set_light_source_settings_attenuation: f64 = LIGHT_SOURCE_SETTINGS_ATTENUATION(image_index, logical_channel_index);
    light_source_settings_wavelength / set_light_source_settings_wavelength: i32 = LIGHT_SOURCE_SETTINGS_WAVELENGTH(image_index, logical_channel_index);

    display_options_id / set_display_options_id: String = DISPLAY_OPTIONS_ID(image_index);
    display_options_zoom / set_display_options_zoom: f64 = DISPLAY_OPTIONS_ZOOM(image_index);
    display_options_projection_z_start / set_display_options_projection_z_start: i32 = PROJECTION_Z_START(image_index);
    display_options_projection_z_stop / set_display_options_projection_z_stop: i32 = PROJECTION_Z_STOP(image_index);
    display_options_time_t_start / set_display_options_time_t_start: i32 = TIME_T_START(image_index);
    display_options_time_t_stop / set_display_options_time_t_stop: i32 = TIME_T_STOP(image_index);

    roi_id / set_roi_id: String = ROI_ID(image_index, roi_index);
    roi_x0 / set_roi_x0: i32 = ROI_X0(image_index, roi_index);
    roi_y0 / set_roi_y0: i32 = ROI_Y0(image_index, roi_index);
    roi_z0 / set_roi_z0: i32 = ROI_Z0(image_index, roi_index);
    roi_t0 / set_roi_t0: i32 = ROI_T0(image_index, roi_index);
    roi_x1 / set_roi_x1: i32 = ROI_X1(image_index, roi_index);
    roi_y1 / set_roi_y1: i32 = ROI_Y1(image_index, roi_index);
    roi_z1 / set_roi_z1: i32 = ROI_Z1(image_index, roi_index);
    roi_t1 / set_roi_t1: i32 = ROI_T1(image_index, roi_index);

    imaging_environment_temperature / set_imaging_environment_temperature: f64 = IMAGING_ENVIRONMENT_TEMPERATURE(image_index);
    imaging_environment_air_pressure / set_imaging_environment_air_pressure: f64 = IMAGING_ENVIRONMENT_AIR_PRESSURE(image_index);
    imaging_environment_humidity / set_imaging_environment_humidity: f64 = IMAGING_ENVIRONMENT_HUMIDITY(image_index);
    imaging_environment_co2_percent / set_imaging_environment_co2_percent: f64 = IMAGING_ENVIRONMENT_CO2_PERCENT(image_index);

    stage_label_name / set_stage_label_name: String = STAGE_LABEL_NAME(image_index);
    stage_label_x / set_stage_label_x: f64 = STAGE_LABEL_X(image_index);
    stage_label_y / set_stage_label_y: f64 = STAGE_LABEL_Y(image_index);
    stage_label_z / set_stage_label_z: f64 = STAGE_LABEL_Z(image_index);

    objective_settings_correction_collar / set_objective_settings_correction_collar: f64 = OBJECTIVE_SETTINGS_CORRECTION_COLLAR(image_index);
    objective_settings_medium / set_objective_settings_medium: String = OBJECTIVE_SETTINGS_MEDIUM(image_index);
    objective_settings_refractive_index / set_objective_settings_refractive_index: f64 = OBJECTIVE_SETTINGS_REFRACTIVE_INDEX(image_index);

    instrument_id / set_instrument_id: String = INSTRUMENT_ID(instrument_index);

    microscope_manufacturer / set_microscope_manufacturer: String = MICROSCOPE_MANUFACTURER(instrument_index);
    microscope_model / set_microscope_model: String = MICROSCOPE_MODEL(instrument_index);
    microscope_serial_number / set_microscope_serial_number: String = MICROSCOPE_SERIAL_NUMBER(instrument_index);
    microscope_type / set_microscope_type: String = MICROSCOPE_TYPE(instrument_index);

    light_source_id / set_light_source_id: String = LIGHT_SOURCE_ID(instrument_index, light_source_index);
    light_source_manufacturer / set_light_source_manufacturer: String = LIGHT_SOURCE_MANUFACTURER(instrument_index, light_source_index);
    light_source_model / set_light_source_model: String = LIGHT_SOURCE_MODEL(instrument_index, light_source_index);
    light_source_serial_number / set_light_source_serial_number: String = LIGHT_SOURCE_SERIAL_NUMBER(instrument_index, light_source_index);
    light_source_power / set_light_source_power: f64 = LIGHT_SOURCE_POWER(instrument_index, light_source_index);

    laser_type / set_laser_type: String = LASER_TYPE(instrument_index, light_source_index);
    laser_laser_medium / set_laser_laser_medium: String = LASER_LASER_MEDIUM(instrument_index, light_source_index);
    laser_wavelength / set_laser_wavelength: i32 = LASER_WAVELENGTH(instrument_index, light_source_index);
    laser_frequency_multiplication / set_laser_frequency_multiplication: i32 = LASER_FREQUENCY_MULTIPLICATION(instrument_index, light_source_index);
    laser_tuneable / set_laser_tuneable: bool = LASER_TUNEABLE(instrument_index, light_source_index);
    laser_pulse / set_laser_pulse: String = LASER_PULSE(instrument_index, light_source_index);
    laser_power / set_laser_power: f64 = LASER_POWER(instrument_index, light_source_index);
    arc_type / set_arc_type: String = ARC_TYPE(instrument_index, light_source_index);
    arc_power / set_arc_power: f64 = ARC_POWER(instrument_index, light_source_index);
    filament_type / set_filament_type: String = FILAMENT_TYPE(instrument_index, light_source_index);
    filament_power / set_filament_power: f64 = FILAMENT_POWER(instrument_index, light_source_index);

    detector_id / set_detector_id: String = DETECTOR_ID(instrument_index, detector_index);
    detector_manufacturer / set_detector_manufacturer: String = DETECTOR_MANUFACTURER(instrument_index, detector_index);
    detector_model / set_detector_model: String = DETECTOR_MODEL(instrument_index, detector_index);
    detector_serial_number / set_detector_serial_number: String = DETECTOR_SERIAL_NUMBER(instrument_index, detector_index);
    detector_type / set_detector_type: String = DETECTOR_TYPE(instrument_index, detector_index);
    detector_gain / set_detector_gain: f64 = DETECTOR_GAIN(instrument_index, detector_index);
    detector_voltage / set_detector_voltage: f64 = DETECTOR_VOLTAGE(instrument_index, detector_index);
    detector_offset / set_detector_offset: f64 = DETECTOR_OFFSET(instrument_index, detector_index);

    objective_id / set_objective_id: String = OBJECTIVE_ID(instrument_index, objective_index);
    objective_manufacturer / set_objective_manufacturer: String = OBJECTIVE_MANUFACTURER(instrument_index, objective_index);
    objective_model / set_objective_model: String = OBJECTIVE_MODEL(instrument_index, objective_index);
    objective_serial_number / set_objective_serial_number: String = OBJECTIVE_SERIAL_NUMBER(instrument_index, objective_index);
    objective_correction / set_objective_correction: String = OBJECTIVE_CORRECTION(instrument_index, objective_index);
    objective_immersion / set_objective_immersion: String = OBJECTIVE_IMMERSION(instrument_index, objective_index);
    objective_lens_na / set_objective_lens_na: f64 = OBJECTIVE_LENS_NA(instrument_index, objective_index);
    objective_nominal_magnification / set_objective_nominal_magnification: i32 = OBJECTIVE_NOMINAL_MAGNIFICATION(instrument_index, objective_index);
    objective_calibrated_magnification / set_objective_calibrated_magnification: f64 = OBJECTIVE_CALIBRATED_MAGNIFICATION(instrument_index, objective_index);
    objective_working_distance / set_objective_working_distance: f64 = OBJECTIVE_WORKING_DISTANCE(instrument_index, objective_index);

    filter_id / set_filter_id: String = FILTER_ID(instrument_index, filter_index);
    filter_manufacturer / set_filter_manufacturer: String = FILTER_MANUFACTURER(instrument_index, filter_index);
    filter_model / set_filter_model: String = FILTER_MODEL(instrument_index, filter_index);
    filter_lot_number / set_filter_lot_number: String = FILTER_LOT_NUMBER(instrument_index, filter_index);
    filter_filter_wheel / set_filter_filter_wheel: String = FILTER_FILTER_WHEEL(instrument_index, filter_index);

    otf_id / set_otf_id: String = OTF_ID(instrument_index, otf_index);
    otf_size_x / set_otf_size_x: i32 = OTF_SIZE_X(instrument_index, otf_index);
    otf_size_y / set_otf_size_y: i32 = OTF_SIZE_Y(instrument_index, otf_index);
    otf_pixel_type / set_otf_pixel_type: String = OTF_PIXEL_TYPE(instrument_index, otf_index);
    otf_path / set_otf_path: String = OTF_PATH(instrument_index, otf_index);
    otf_optical_axis_averaged / set_otf_optical_axis_averaged: bool = OTF_OPTICAL_AXIS_AVERAGED(instrument_index, otf_index);

    plate_id / set_plate_id: String = PLATE_ID(plate_index);
    plate_name / set_plate_name: String = PLATE_NAME(plate_index);
    plate_description / set_plate_description: String = PLATE_DESCRIPTION(plate_index);
    plate_external_identifier / set_plate_external_identifier: String = PLATE_EXTERNAL_IDENTIFIER(plate_index);
    plate_status / set_plate_status: String = PLATE_STATUS(plate_index);

    well_id / set_well_id: String = WELL_ID(plate_index, well_index);
    well_column / set_well_column: i32 = WELL_COLUMN(plate_index, well_index);
    well_row / set_well_row: i32 = WELL_ROW(plate_index, well_index);
    well_type / set_well_type: String = WELL_TYPE(plate_index, well_index);

    well_sample_id / set_well_sample_id: String = WELL_SAMPLE_ID(plate_index, well_index, well_sample_index);
    well_sample_index / set_well_sample_index: i32 = WELL_SAMPLE_INDEX(plate_index, well_index, well_sample_index);
    well_sample_pos_x / set_well_sample_pos_x: f64 = WELL_SAMPLE_POS_X(plate_index, well_index, well_sample_index);
    well_sample_pos_y / set_well_sample_pos_y: f64 = WELL_SAMPLE_POS_Y(plate_index, well_index, well_sample_index);
    well_sample_timepoint / set_well_sample_timepoint: i32 = WELL_SAMPLE_TIMEPOINT(plate_index, well_index, well_sample_index);

    screen_id / set_screen_id: String = SCREEN_ID(screen_index);
    screen_name / set_screen_name: String = SCREEN_NAME(screen_index);
    screen_description / set_screen_description: String = SCREEN_DESCRIPTION(screen_index);
    screen_protocol_identifier / set_screen_protocol_identifier: String = SCREEN_PROTOCOL_IDENTIFIER(screen_index);
    screen_reagent_set_identifier / set_screen_reagent_set_identifier: String = SCREEN_REAGENT_SET_IDENTIFIER(screen_index);
    screen_type / set_screen_type: String = SCREEN_TYPE(screen_index);

    reagent_id / set_reagent_id: String = REAGENT_ID(screen_index, reagent_index);
    reagent_name / set_reagent_name: String = REAGENT_NAME(screen_index, reagent_index);
    reagent_description / set_reagent_description: String = REAGENT_DESCRIPTION(screen_index, reagent_index);
    reagent_identifier / set_reagent_identifier: String = REAGENT_IDENTIFIER(screen_index, reagent_index);
}
