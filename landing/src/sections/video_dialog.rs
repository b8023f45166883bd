//! Thumbnail that opens an embedded video in a modal.

use crate::config::VideoConfig;
use crate::icons::{Icon, IconSvg};
use leptos::prelude::*;

#[component]
pub fn VideoDialog(video: VideoConfig) -> impl IntoView {
    let (open, set_open) = signal(false);
    let src = video.src.clone();

    view! {
        <div class="relative rounded-2xl shadow-2xl overflow-hidden" data-video-dialog="">
            <button
                type="button"
                class="group relative block w-full cursor-pointer"
                aria-label="Play video"
                on:click=move |_| {
                    tracing::debug!("video dialog opened");
                    set_open.set(true);
                }
            >
                <img
                    src=video.thumbnail
                    alt=video.alt
                    class="w-full rounded-2xl transition-all duration-200 group-hover:brightness-75"
                />
                <span class="absolute inset-0 flex items-center justify-center">
                    <span class="flex h-24 w-24 items-center justify-center rounded-full bg-white/20 backdrop-blur-md transition-transform duration-200 group-hover:scale-110">
                        <IconSvg icon=Icon::Play class="h-8 w-8 text-white fill-white" />
                    </span>
                </span>
            </button>

            <Show when=move || open.get()>
                <div
                    class="fixed inset-0 z-50 flex items-center justify-center bg-black/80 backdrop-blur-sm"
                    role="dialog"
                    aria-modal="true"
                    on:click=move |_| set_open.set(false)
                >
                    <div
                        class="relative mx-4 aspect-video w-full max-w-4xl"
                        on:click=|ev| ev.stop_propagation()
                    >
                        <button
                            type="button"
                            class="absolute -top-12 right-0 rounded-full bg-neutral-900/50 p-2 text-white ring-1 backdrop-blur-md"
                            aria-label="Close video"
                            on:click=move |_| set_open.set(false)
                        >
                            <IconSvg icon=Icon::X class="h-5 w-5" />
                        </button>
                        <iframe
                            src=src.clone()
                            class="h-full w-full rounded-2xl border-2 border-white"
                            allowfullscreen=true
                            allow="autoplay; encrypted-media; picture-in-picture"
                        ></iframe>
                    </div>
                </div>
            </Show>
        </div>
    }
}
